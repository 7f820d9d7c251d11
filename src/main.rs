use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use hifitime::Epoch;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

use orrery::bodies::{position_record, Body, CelestialBody, PositionRecord};
use orrery::config::{OrreryConfig, ReportConfig, DEFAULT_CONFIG_FILE};
use orrery::format::{decl_string, rasc_string, rasc_to_zodiac, zodiac_sign};
use orrery::time::{current_timestamp, CivilDateTime, Timestamp, UtcResolver};

#[derive(Parser)]
#[command(
    name = "orrery",
    version,
    about = "Geocentric positions of the Sun, Moon and planets"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the position table of the configured bodies
    Positions {
        /// UTC instant (e.g. 2013-08-10T00:34:00 UTC), defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Print a TOML document with the full details instead of the table
        #[arg(long)]
        toml: bool,
    },
    /// Resolve civil UTC fields to a Unix timestamp
    Timestamp {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        month: i32,
        day: i32,
        #[arg(default_value = "0")]
        hour: i32,
        #[arg(default_value = "0")]
        minute: i32,
        #[arg(default_value = "0")]
        second: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("logger initialization failed")?;

    let config = OrreryConfig::load_or_default(&cli.config);
    let resolver = UtcResolver::with_config(Local, config.resolver.clone());

    match cli.command {
        Commands::Positions { at, toml } => {
            let at = match at {
                Some(text) => {
                    let epoch = Epoch::from_str(text.trim())
                        .with_context(|| format!("cannot parse instant '{text}'"))?;
                    let (y, mo, d, h, mi, s, _) = epoch.to_gregorian_utc();
                    let civil = CivilDateTime::try_new(
                        y,
                        mo.into(),
                        d.into(),
                        h.into(),
                        mi.into(),
                        s.into(),
                    )?;
                    resolver.resolve(&civil)?
                }
                None => current_timestamp(),
            };
            debug!("Computing positions at {at}");
            if toml {
                println!("{}", report_toml(at, &config.report)?);
            } else {
                println!("{}", report(at, &config.report)?);
            }
        }
        Commands::Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => {
            let civil = CivilDateTime::try_new(year, month, day, hour, minute, second)?;
            let ts = resolver.resolve(&civil)?;
            println!("{}", ts.unix_seconds());
            println!("{}", ts.time_string_inet());
            println!("JD {:.5}", ts.julian_date());
        }
    }

    Ok(())
}

fn report_row(body: Body, at: Timestamp, precision: usize) -> Result<String> {
    let sph = CelestialBody::new(body, at)
        .spherical()
        .with_context(|| format!("cannot compute the position of {body}"))?;
    let (ra, decl) = (sph.right_ascension, sph.declination);

    Ok(format!(
        "{:<8} {:<12} {:<13} {:>12.*} {:<7} {}",
        body.name(),
        rasc_string(ra),
        decl_string(decl),
        precision,
        sph.distance,
        rasc_to_zodiac(ra),
        zodiac_sign(ra)
    ))
}

/// Position table headed by the calculation instant.
fn report(at: Timestamp, config: &ReportConfig) -> Result<String> {
    let header = format!(
        "{:<8} {:<12} {:<13} {:>12} {:<7} {}",
        "PLANET", "R.ASCENSION", "DECLINATION", "DIST", "ZODIAC", "ZODIAC SIGN"
    );
    let rows = config
        .bodies
        .iter()
        .map(|&body| report_row(body, at, config.distance_precision))
        .collect::<Result<Vec<_>>>()?;

    Ok([at.time_string(), String::new(), header]
        .into_iter()
        .chain(rows)
        .join("\n"))
}

#[derive(Serialize)]
struct PositionReport {
    timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    civil: Option<CivilDateTime>,
    bodies: Vec<PositionRecord>,
}

/// Position report as a TOML document, one `[[bodies]]` table per body.
fn report_toml(at: Timestamp, config: &ReportConfig) -> Result<String> {
    let bodies = config
        .bodies
        .iter()
        .map(|&body| position_record(body, at))
        .collect::<Result<Vec<_>, _>>()?;
    let report = PositionReport {
        timestamp: at,
        civil: at.to_civil(),
        bodies,
    };
    toml::to_string_pretty(&report).context("cannot serialize the position report")
}

#[cfg(test)]
mod main_test {
    use super::*;

    const AT: Timestamp = Timestamp::from_unix(1_376_094_840);

    #[test]
    fn test_report_layout() {
        let config = ReportConfig {
            bodies: vec![Body::Sun, Body::Moon],
            distance_precision: 3,
        };
        let text = report(AT, &config).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Saturday August 10, 2013 00:34:00 UTC");
        assert!(lines[2].starts_with("PLANET"));
        assert!(lines[3].starts_with("Sun "));
        assert!(lines[4].starts_with("Moon "));
        assert!(lines[3].ends_with("Leo"));
    }

    #[test]
    fn test_distance_precision() {
        let row = report_row(Body::Sun, AT, 2).unwrap();
        let dist = row.split_whitespace().nth(7).unwrap();
        assert_eq!(dist.split('.').nth(1).map(str::len), Some(2));
    }

    #[test]
    fn test_toml_report() {
        let config = ReportConfig {
            bodies: vec![Body::Sun, Body::Mars],
            distance_precision: 7,
        };
        let text = report_toml(AT, &config).unwrap();
        let parsed: toml::Table = toml::from_str(&text).unwrap();

        assert_eq!(parsed["timestamp"].as_integer(), Some(1_376_094_840));
        assert_eq!(parsed["civil"]["year"].as_integer(), Some(2013));

        let bodies = parsed["bodies"].as_array().unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0]["body"].as_str(), Some("sun"));
        assert_eq!(bodies[0]["zodiac"]["sign"].as_str(), Some("Leo"));
        assert_eq!(bodies[1]["body"].as_str(), Some("mars"));
        assert!(bodies[1]["coordinates"]["distance"].as_float().unwrap() > 0.3);
        assert!(bodies[1]["elements"]["semi_major_axis"].as_float().is_some());
        assert!(bodies[1]["right_ascension_hms"]["hours"].as_integer().is_some());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["orrery", "timestamp", "-44", "3", "15"]);
        match cli.command {
            Commands::Timestamp {
                year, hour, second, ..
            } => {
                assert_eq!(year, -44);
                assert_eq!(hour, 0);
                assert_eq!(second, 0);
            }
            _ => panic!("expected the timestamp command"),
        }
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
