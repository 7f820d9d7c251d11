use chrono::{FixedOffset, Utc};
use chrono_tz::Europe;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery::time::{days_in_month, CivilDateTime, LocalCalendar, UtcResolver};

fn random_targets(rng: &mut StdRng, samples: usize) -> Vec<CivilDateTime> {
    (0..samples)
        .map(|_| {
            let year = rng.random_range(1950..2050);
            let month = rng.random_range(1..=12);
            CivilDateTime::new(
                year,
                month,
                rng.random_range(1..=days_in_month(month, year)),
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60),
            )
        })
        .collect()
}

fn bench_calendar<C: LocalCalendar>(c: &mut Criterion, name: &str, calendar: C) {
    let resolver = UtcResolver::new(calendar);
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function(name, |b| {
        b.iter_batched(
            || random_targets(&mut rng, 1_000),
            |targets| {
                for target in targets {
                    let _ = black_box(resolver.resolve(black_box(&target)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_utc(c: &mut Criterion) {
    bench_calendar(c, "resolve/utc", Utc);
}

fn bench_fixed_offset(c: &mut Criterion) {
    let Some(offset) = FixedOffset::east_opt(5 * 3600 + 1800) else {
        return;
    };
    bench_calendar(c, "resolve/fixed_offset", offset);
}

fn bench_dst_zone(c: &mut Criterion) {
    bench_calendar(c, "resolve/europe_helsinki", Europe::Helsinki);
}

/// Worst case: the skipped hour of a spring-forward night forces the fallback stages.
fn bench_dst_gap(c: &mut Criterion) {
    let resolver = UtcResolver::new(Europe::Helsinki);
    let target = CivilDateTime::new(2024, 3, 31, 1, 30, 0);

    c.bench_function("resolve/europe_helsinki_transition", |b| {
        b.iter(|| black_box(resolver.resolve(black_box(&target)).ok()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_utc, bench_fixed_offset, bench_dst_zone, bench_dst_gap
);
criterion_main!(benches);
