//! # UTC timestamp resolution through a local calendar
//!
//! The host calendar primitive ([`LocalCalendar`]) only understands *local* wall-clock
//! readings. To obtain the instant of a civil date/time read as UTC, the resolver:
//!
//! 1. reads a seed (the requested fields, possibly shifted by a few minutes) as local
//!    time, giving `t1`,
//! 2. decodes `t1` as UTC and reads those fields back as local time, giving `t2`,
//! 3. takes `t1 + (t1 − t2)`, undoes the seed shift, and keeps the candidate only if it
//!    decodes back (as UTC) to the requested fields.
//!
//! The offset measured at `t2` can differ from the offset that applied at `t1` when a
//! daylight saving transition lies between them, or the seed can fall in a skipped
//! local hour. The resolver then walks through fallback stages:
//!
//! * a within-day correction of the first candidate ([`CivilDateTime::adj_day_secs_diff`]),
//! * seeds one hour earlier and later,
//! * seeds every minute across `±search_window_minutes`,
//! * seeds every minute across `±degenerate_window_minutes`.
//!
//! A verified candidate always decodes to the requested fields, so the first one found
//! is the answer. Exhausting every stage yields [`OrreryError::TimeResolution`].

use log::{debug, error, trace};

use crate::config::ResolverConfig;
use crate::orrery_errors::OrreryError;

use super::calendar::CivilDateTime;
use super::local::LocalCalendar;
use super::timestamp::Timestamp;

pub struct UtcResolver<C> {
    calendar: C,
    config: ResolverConfig,
}

impl<C: LocalCalendar> UtcResolver<C> {
    pub fn new(calendar: C) -> Self {
        Self::with_config(calendar, ResolverConfig::default())
    }

    pub fn with_config(calendar: C, config: ResolverConfig) -> Self {
        UtcResolver { calendar, config }
    }

    /// Candidate instant for `target` using a seed shifted by `shift_minutes`.
    fn candidate(&self, target: &CivilDateTime, shift_minutes: i64) -> Option<i64> {
        let seed = target.increment_minute(shift_minutes);
        let t1 = self.calendar.local_to_timestamp(&seed)?;
        let decoded = Timestamp::from_unix(t1).to_civil()?;
        let t2 = self.calendar.local_to_timestamp(&decoded)?;
        Some(t1 + (t1 - t2) - shift_minutes * 60)
    }

    fn verify(candidate: i64, target: &CivilDateTime) -> Option<Timestamp> {
        let ts = Timestamp::from_unix(candidate);
        (ts.to_civil().as_ref() == Some(target)).then_some(ts)
    }

    fn first_verified<I>(&self, target: &CivilDateTime, shifts: I) -> Option<Timestamp>
    where
        I: IntoIterator<Item = i64>,
    {
        shifts.into_iter().find_map(|shift| {
            let ts = self
                .candidate(target, shift)
                .and_then(|c| Self::verify(c, target));
            if ts.is_some() {
                trace!("{target} resolved with a seed shifted by {shift} min");
            }
            ts
        })
    }

    /// Resolve `target`, read as UTC, to a [`Timestamp`].
    ///
    /// `target` is assumed to be a valid civil date/time; invalid fields simply fail to
    /// resolve.
    pub fn resolve(&self, target: &CivilDateTime) -> Result<Timestamp, OrreryError> {
        let first = self.candidate(target, 0);
        if let Some(ts) = first.and_then(|c| Self::verify(c, target)) {
            return Ok(ts);
        }

        if let Some(candidate) = first {
            debug!("{target}: direct candidate rejected, applying within-day correction");
            let decoded = Timestamp::from_unix(candidate).to_civil();
            let corrected = decoded
                .map(|d| candidate + d.adj_day_secs_diff(target))
                .and_then(|c| Self::verify(c, target));
            if let Some(ts) = corrected {
                return Ok(ts);
            }
        }

        if self.config.hour_probe {
            debug!("{target}: probing seeds one hour either side");
            if let Some(ts) = self.first_verified(target, [-60, 60]) {
                return Ok(ts);
            }
        }

        let window = i64::from(self.config.search_window_minutes);
        debug!("{target}: per-minute search across ±{window} min");
        if let Some(ts) = self.first_verified(target, symmetric_shifts(1, window)) {
            return Ok(ts);
        }

        let degenerate = i64::from(self.config.degenerate_window_minutes);
        if degenerate > window {
            debug!("{target}: degenerate per-minute search across ±{degenerate} min");
            if let Some(ts) = self.first_verified(target, symmetric_shifts(window + 1, degenerate))
            {
                return Ok(ts);
            }
        }

        error!("Unable to resolve {target} as a UTC timestamp after exhausting all seeds");
        Err(OrreryError::TimeResolution(*target))
    }
}

/// `-low, low, -(low + 1), low + 1, …, -high, high`
fn symmetric_shifts(low: i64, high: i64) -> impl Iterator<Item = i64> {
    (low..=high).flat_map(|m| [-m, m])
}

#[cfg(test)]
mod resolve_test {
    use chrono::{FixedOffset, Utc};

    use super::*;

    /// Local calendar that cannot read any wall-clock time.
    struct BrokenCalendar;

    impl LocalCalendar for BrokenCalendar {
        fn local_to_timestamp(&self, _civil: &CivilDateTime) -> Option<i64> {
            None
        }
    }

    #[test]
    fn test_resolve_with_utc_calendar() {
        let resolver = UtcResolver::new(Utc);
        let ts = resolver
            .resolve(&CivilDateTime::new(2013, 8, 10, 0, 34, 0))
            .unwrap();
        assert_eq!(ts.unix_seconds(), 1_376_094_840);
    }

    #[test]
    fn test_resolve_with_fixed_offsets() {
        let target = CivilDateTime::new(2013, 8, 10, 0, 34, 0);
        for hours in [-12, -5, 0, 3, 9, 14] {
            let zone = FixedOffset::east_opt(hours * 3600).unwrap();
            let ts = UtcResolver::new(zone).resolve(&target).unwrap();
            assert_eq!(ts.unix_seconds(), 1_376_094_840, "offset {hours} h");
        }
    }

    #[test]
    fn test_resolve_before_unix_epoch() {
        let target = CivilDateTime::new(1947, 12, 1, 12, 0, 0);
        let ts = UtcResolver::new(FixedOffset::west_opt(5 * 3600).unwrap())
            .resolve(&target)
            .unwrap();
        assert_eq!(ts.unix_seconds(), -696_945_600);
        assert_eq!(ts.to_civil(), Some(target));
    }

    #[test]
    fn test_resolution_failure() {
        let target = CivilDateTime::new(2013, 8, 10, 0, 34, 0);
        let resolver = UtcResolver::with_config(
            BrokenCalendar,
            ResolverConfig {
                hour_probe: true,
                search_window_minutes: 5,
                degenerate_window_minutes: 10,
            },
        );
        assert_eq!(
            resolver.resolve(&target),
            Err(OrreryError::TimeResolution(target))
        );
    }

    #[test]
    fn test_symmetric_shifts() {
        let shifts: Vec<i64> = symmetric_shifts(1, 3).collect();
        assert_eq!(shifts, vec![-1, 1, -2, 2, -3, 3]);
    }
}
