//! Host calendar primitive: interpret a civil date/time as *local* time.
//!
//! The UTC resolver only needs one operation from the host, turning a local wall-clock
//! reading into an absolute instant. Any [`chrono::TimeZone`] provides it, so the resolver
//! can run against the machine's zone (`chrono::Local`), a fixed offset, or a named zone.

use chrono::TimeZone;

use super::calendar::CivilDateTime;

pub trait LocalCalendar {
    /// Unix timestamp of `civil` read as a local wall-clock time.
    ///
    /// Ambiguous readings (clock set back) take the earliest instant; readings inside a
    /// skipped interval (clock set forward) have no instant and return `None`.
    fn local_to_timestamp(&self, civil: &CivilDateTime) -> Option<i64>;
}

impl<Tz: TimeZone> LocalCalendar for Tz {
    fn local_to_timestamp(&self, civil: &CivilDateTime) -> Option<i64> {
        let naive = civil.to_naive()?;
        self.from_local_datetime(&naive)
            .earliest()
            .map(|instant| instant.timestamp())
    }
}
