//! # Time
//!
//! Civil calendar arithmetic and UTC timestamps.
//!
//! * [`calendar`]: leap years, date validation, [`CivilDateTime`] carries
//! * [`local`]: the [`LocalCalendar`] primitive backed by chrono time zones
//! * [`resolve`]: [`UtcResolver`], UTC resolution on top of a local calendar
//! * [`timestamp`]: the [`Timestamp`] instant type

pub mod calendar;
pub mod local;
pub mod resolve;
pub mod timestamp;

pub use calendar::{days_in_month, is_leap_year, validate_date, CivilDateTime};
pub use local::LocalCalendar;
pub use resolve::UtcResolver;
pub use timestamp::{current_timestamp, resolve_utc_timestamp, Timestamp};
