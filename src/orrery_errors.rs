use std::fmt;

use thiserror::Error;

use crate::time::calendar::CivilDateTime;

/// Field of a civil date/time that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
            DateField::Hour => "hour",
            DateField::Minute => "minute",
            DateField::Second => "second",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid date: {field} = {value} ({reason})")]
    InvalidDate {
        field: DateField,
        value: i32,
        reason: String,
    },

    #[error("Unable to resolve a UTC timestamp for {0}")]
    TimeResolution(CivilDateTime),

    #[error(
        "Kepler's equation did not converge after {iterations} iterations \
         (mean anomaly = {mean_anomaly}, eccentricity = {eccentricity})"
    )]
    KeplerNonConvergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error("Invalid configuration file: {0}")]
    ConfigFile(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for OrreryError {
    fn from(err: toml::de::Error) -> Self {
        OrreryError::ConfigFile(err.to_string())
    }
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (
                InvalidDate {
                    field: f1,
                    value: v1,
                    ..
                },
                InvalidDate {
                    field: f2,
                    value: v2,
                    ..
                },
            ) => f1 == f2 && v1 == v2,
            (TimeResolution(a), TimeResolution(b)) => a == b,
            (
                KeplerNonConvergence {
                    mean_anomaly: m1,
                    eccentricity: e1,
                    iterations: i1,
                },
                KeplerNonConvergence {
                    mean_anomaly: m2,
                    eccentricity: e2,
                    iterations: i2,
                },
            ) => m1 == m2 && e1 == e2 && i1 == i2,
            (ConfigFile(a), ConfigFile(b)) => a == b,

            // I/O errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod orrery_errors_test {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = OrreryError::InvalidDate {
            field: DateField::Month,
            value: 13,
            reason: "outside [1, 12]".into(),
        };
        assert_eq!(err.to_string(), "Invalid date: month = 13 (outside [1, 12])");
    }

    #[test]
    fn test_invalid_date_eq_ignores_reason() {
        let a = OrreryError::InvalidDate {
            field: DateField::Day,
            value: 32,
            reason: "a".into(),
        };
        let b = OrreryError::InvalidDate {
            field: DateField::Day,
            value: 32,
            reason: "b".into(),
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            OrreryError::InvalidDate {
                field: DateField::Hour,
                value: 32,
                reason: "a".into()
            }
        );
    }
}
