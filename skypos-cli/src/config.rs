//! Configuration file support.
//!
//! Settings come from an optional TOML file and are overridden by flags:
//!
//! ```toml
//! [observer]
//! latitude = "35:42:09N"
//! longitude = "139:44:42E"
//! time_zone = "Asia/Tokyo"     # or a fixed offset: utc_offset = "+09:00"
//!
//! [logging]
//! level = "info"
//! ```

use crate::cli::Cli;
use anyhow::{anyhow, bail, Context};
use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use skypos_coords::{GeographicCoordinate, LatitudeDirection, LongitudeDirection};
use skypos_core::angle::AngleUnits;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "skypos.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observer: ObserverSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObserverSettings {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub utc_offset: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// The observer's civil clock: a fixed offset or a named zone with DST rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObserverZone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl fmt::Display for ObserverZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObserverZone::Fixed(offset) => write!(f, "UTC{}", offset),
            ObserverZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Observer and zone after merging file and flags.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub observer: GeographicCoordinate,
    pub zone: ObserverZone,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The file to read: `explicit` if given, else `skypos.toml` in `dir` if
    /// it exists.
    pub fn find(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        fallback.is_file().then_some(fallback)
    }

    /// Reads `path`, or returns the defaults when there is none.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(location) = &cli.observing_location {
            if let [lat, lon] = location.as_slice() {
                self.observer.latitude = Some(lat.clone());
                self.observer.longitude = Some(lon.clone());
            }
        }
        if let Some(offset) = &cli.utc_offset {
            self.observer.utc_offset = Some(offset.clone());
            self.observer.time_zone = None;
        }
        if let Some(zone) = &cli.time_zone {
            self.observer.time_zone = Some(zone.clone());
            self.observer.utc_offset = None;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }

    pub fn resolve(&self) -> anyhow::Result<Resolved> {
        let (lat, lon) = match (&self.observer.latitude, &self.observer.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => bail!(
                "observer location is not configured; pass -L <LAT> <LON> or set [observer] in {}",
                DEFAULT_CONFIG_FILE
            ),
        };
        let observer = parse_observer(lat, lon)?;
        let zone = match (&self.observer.time_zone, &self.observer.utc_offset) {
            (Some(_), Some(_)) => bail!("set either time_zone or utc_offset, not both"),
            (Some(name), None) => ObserverZone::Named(parse_time_zone(name)?),
            (None, Some(offset)) => ObserverZone::Fixed(parse_utc_offset(offset)?),
            (None, None) => {
                log::info!("no time zone configured, using UTC");
                ObserverZone::Fixed(
                    FixedOffset::east_opt(0).ok_or_else(|| anyhow!("invalid zero offset"))?,
                )
            }
        };
        Ok(Resolved { observer, zone })
    }
}

pub fn parse_time_zone(s: &str) -> anyhow::Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("unknown time zone '{}': {}", s, e))
}

pub fn parse_utc_offset(s: &str) -> anyhow::Result<FixedOffset> {
    s.trim()
        .parse::<FixedOffset>()
        .map_err(|e| anyhow!("invalid UTC offset '{}': {}", s, e))
}

fn split_direction(s: &str) -> (&str, Option<&str>) {
    let s = s.trim();
    match s.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => (s[..i].trim_end(), Some(&s[i..])),
        _ => (s, None),
    }
}

/// Parses an observer location.
///
/// Either both parts carry a compass letter (`35:42:09N`, `139:44:42E`) with
/// non-negative magnitudes, or neither does and the values are signed degrees,
/// north and east positive.
pub fn parse_observer(lat: &str, lon: &str) -> anyhow::Result<GeographicCoordinate> {
    let (lat_body, lat_dir) = split_direction(lat);
    let (lon_body, lon_dir) = split_direction(lon);

    let lat_angle = lat_body
        .dms()
        .with_context(|| format!("invalid latitude '{}'", lat))?;
    let lon_angle = lon_body
        .dms()
        .with_context(|| format!("invalid longitude '{}'", lon))?;

    let observer = match (lat_dir, lon_dir) {
        (None, None) => GeographicCoordinate::from_angles(lat_angle, lon_angle)?,
        (Some(lat_dir), Some(lon_dir)) => GeographicCoordinate::new(
            Some(lat_dir.parse::<LatitudeDirection>()?),
            lat_angle.degree(),
            lat_angle.arc_minute(),
            lat_angle.arc_second(),
            Some(lon_dir.parse::<LongitudeDirection>()?),
            lon_angle.degree(),
            lon_angle.arc_minute(),
            lon_angle.arc_second(),
        )?,
        _ => bail!(
            "give a compass letter on both latitude and longitude or on neither: '{}' '{}'",
            lat,
            lon
        ),
    };
    Ok(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const TOKYO: &str = r#"
[observer]
latitude = "35:42:09N"
longitude = "139:44:42E"
utc_offset = "+09:00"

[logging]
level = "info"
"#;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_file() {
        let file = write_config(TOKYO);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.observer.latitude.as_deref(), Some("35:42:09N"));
        assert_eq!(config.logging.level, "info");

        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.observer.lat_degree(), 35);
        assert_eq!(resolved.observer.long_second(), 42.0);
        assert_eq!(
            resolved.zone,
            ObserverZone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap())
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[observer]\nlatitude = \"10\"\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.observer.longitude, None);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let file = write_config("[observer\nlatitude = ");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_find_in_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::find(None, dir.path()), None);
        assert_eq!(Config::load(None).unwrap(), Config::default());

        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, TOKYO).unwrap();
        let found = Config::find(None, dir.path());
        assert_eq!(found.as_deref(), Some(path.as_path()));

        let config = Config::load(found.as_deref()).unwrap();
        assert_eq!(config.observer.utc_offset.as_deref(), Some("+09:00"));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let found = Config::find(Some(&missing), dir.path());
        assert_eq!(found.as_deref(), Some(missing.as_path()));
        assert!(Config::load(found.as_deref()).is_err());
    }

    #[test]
    fn test_named_time_zone() {
        let file = write_config(
            "[observer]\nlatitude = \"33:51:42S\"\nlongitude = \"151:08:10E\"\ntime_zone = \"Australia/Sydney\"\n",
        );
        let resolved = Config::from_file(file.path()).unwrap().resolve().unwrap();
        assert_eq!(resolved.zone, ObserverZone::Named(chrono_tz::Australia::Sydney));
        assert_eq!(resolved.zone.to_string(), "Australia/Sydney");
    }

    #[test]
    fn test_offset_and_zone_in_file_conflict() {
        let file = write_config(
            "[observer]\nlatitude = \"10\"\nlongitude = \"20\"\nutc_offset = \"+09:00\"\ntime_zone = \"Asia/Tokyo\"\n",
        );
        let config = Config::from_file(file.path()).unwrap();
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_zone_flag_replaces_file_offset() {
        let file = write_config(TOKYO);
        let mut config = Config::from_file(file.path()).unwrap();
        let cli = Cli::try_parse_from([
            "skypos",
            "--time-zone",
            "Asia/Tokyo",
            "transit",
            "--ra",
            "5:56:19",
            "--dec",
            "7:24:33",
            "--date",
            "2021-01-15",
        ])
        .unwrap();
        config.merge_cli(&cli);
        assert_eq!(config.observer.utc_offset, None);
        assert_eq!(
            config.resolve().unwrap().zone,
            ObserverZone::Named(chrono_tz::Asia::Tokyo)
        );
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config(TOKYO);
        let mut config = Config::from_file(file.path()).unwrap();
        let cli = Cli::try_parse_from([
            "skypos",
            "-L",
            "33:51:42S",
            "151:08:10E",
            "--utc-offset",
            "+11:00",
            "--log-level",
            "debug",
            "transit",
            "--ra",
            "5:56:19",
            "--dec",
            "7:24:33",
            "--date",
            "2021-01-15",
        ])
        .unwrap();
        config.merge_cli(&cli);

        assert_eq!(config.logging.level, "debug");
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.observer.lat_direction(), Some(LatitudeDirection::South));
        assert_eq!(resolved.observer.lat_degree(), 33);
        assert_eq!(
            resolved.zone,
            ObserverZone::Fixed(FixedOffset::east_opt(11 * 3600).unwrap())
        );
    }

    #[test]
    fn test_parse_observer_signed_degrees() {
        let nyc = parse_observer("40.711389", "-74.008056").unwrap();
        assert_eq!(nyc.lat_direction(), Some(LatitudeDirection::North));
        assert_eq!(nyc.long_direction(), Some(LongitudeDirection::West));
        assert!((nyc.long_degrees() + 74.008056).abs() < 1e-12);
    }

    #[test]
    fn test_parse_observer_rejects_mixed_notation() {
        assert!(parse_observer("35:42:09N", "139.745").is_err());
        assert!(parse_observer("95:00:00N", "0:00:00E").is_err());
        assert!(parse_observer("35:42:09Q", "139:44:42E").is_err());
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("-03:00").unwrap().local_minus_utc(), -3 * 3600);
        assert!(parse_utc_offset("Asia/Tokyo").is_err());
    }

    #[test]
    fn test_parse_time_zone() {
        assert_eq!(parse_time_zone("America/Sao_Paulo").unwrap(), chrono_tz::America::Sao_Paulo);
        assert!(parse_time_zone("Mars/Olympus_Mons").is_err());
        assert!(parse_time_zone("+09:00").is_err());
    }
}
