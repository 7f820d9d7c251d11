//! # Configuration
//!
//! Runtime settings loaded from an `orrery.toml` file. Every field has a default, so a
//! partial file (or no file at all) is valid.
//!
//! ```toml
//! [resolver]
//! hour_probe = true
//! search_window_minutes = 120
//! degenerate_window_minutes = 1440
//!
//! [report]
//! bodies = ["sun", "moon", "mars"]
//! distance_precision = 7
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::bodies::Body;
use crate::orrery_errors::OrreryError;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "orrery.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Fallback stages of the UTC timestamp resolver
    pub resolver: ResolverConfig,
    /// Position report printed by the command line tool
    pub report: ReportConfig,
}

/// Search space of the UTC timestamp resolver once the direct candidate fails to verify.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Retry with seeds one hour before and after the requested time
    pub hour_probe: bool,
    /// Half-width of the per-minute seed search
    pub search_window_minutes: u32,
    /// Half-width of the last-resort per-minute search, normally one day
    pub degenerate_window_minutes: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            hour_probe: true,
            search_window_minutes: 120,
            degenerate_window_minutes: 1440,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Bodies listed in the report, in order
    pub bodies: Vec<Body>,
    /// Decimal places used for distances
    pub distance_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            bodies: Body::VISIBLE.to_vec(),
            distance_precision: 7,
        }
    }
}

impl OrreryConfig {
    /// Load a configuration file.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path of a TOML configuration file
    ///
    /// Return
    /// ------
    /// * the parsed configuration, or an [`OrreryError`] if the file cannot be read or parsed
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, OrreryError> {
        let contents = fs::read_to_string(&path)?;
        let config = toml::from_str::<OrreryConfig>(&contents)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when it is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(OrreryError::IoError(_)) => {
                info!(
                    "No configuration file at {}, using defaults",
                    path.as_ref().display()
                );
                Self::default()
            }
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, OrreryError> {
        toml::to_string_pretty(self).map_err(|e| OrreryError::ConfigFile(e.to_string()))
    }
}

#[cfg(test)]
mod config_test {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrreryConfig::default();
        assert!(config.resolver.hour_probe);
        assert_eq!(config.resolver.search_window_minutes, 120);
        assert_eq!(config.resolver.degenerate_window_minutes, 1440);
        assert_eq!(config.report.bodies.len(), 10);
        assert_eq!(config.report.bodies[0], Body::Sun);
        assert_eq!(config.report.distance_precision, 7);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = OrreryConfig::default();
        config.report.bodies = vec![Body::Moon, Body::Mars];
        config.resolver.search_window_minutes = 30;

        let toml_str = config.to_toml().unwrap();
        let parsed: OrreryConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nbodies = [\"moon\", \"sun\"]").unwrap();

        let config = OrreryConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.report.bodies, vec![Body::Moon, Body::Sun]);
        assert_eq!(config.report.distance_precision, 7);
        assert_eq!(config.resolver, ResolverConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nbodies = [\"vulcan\"]").unwrap();

        let err = OrreryConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, OrreryError::ConfigFile(_)));
        assert_eq!(
            OrreryConfig::load_or_default(file.path()),
            OrreryConfig::default()
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = OrreryConfig::load_from_path("/nonexistent/orrery.toml").unwrap_err();
        assert!(matches!(err, OrreryError::IoError(_)));
        assert_eq!(
            OrreryConfig::load_or_default("/nonexistent/orrery.toml"),
            OrreryConfig::default()
        );
    }
}
