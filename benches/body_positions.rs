use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery::bodies::{position, Body};
use orrery::time::Timestamp;

/// Random instants between 1900 and 2100.
fn random_instants(rng: &mut StdRng, samples: usize) -> Vec<Timestamp> {
    (0..samples)
        .map(|_| Timestamp::from_unix(rng.random_range(-2_208_988_800..4_102_444_800)))
        .collect()
}

fn bench_single_body(c: &mut Criterion, body: Body, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    c.bench_function(&format!("position/{}", body.name().to_lowercase()), |b| {
        b.iter_batched(
            || random_instants(&mut rng, 1_000),
            |instants| {
                for at in instants {
                    let _ = black_box(position(black_box(body), at));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_planet(c: &mut Criterion) {
    bench_single_body(c, Body::Mars, 0xDEADBEEF);
}

fn bench_moon(c: &mut Criterion) {
    bench_single_body(c, Body::Moon, 0xFEEDFACE);
}

/// Full report: every visible body at one instant.
fn bench_report(c: &mut Criterion) {
    let at = Timestamp::from_unix(1_376_094_840);

    c.bench_function("position/all_visible", |b| {
        b.iter(|| {
            for body in Body::VISIBLE {
                let _ = black_box(position(body, black_box(at)));
            }
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planet, bench_moon, bench_report
);
criterion_main!(benches);
