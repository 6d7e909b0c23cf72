//! CLI argument definitions for skypos

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skypos")]
#[command(about = "Where is that star, and when does it culminate?")]
#[command(version)]
pub struct Cli {
    /// Observer latitude and longitude, e.g. `35:42:09N 139:44:42E` or `-33.86 151.21`
    #[arg(
        short = 'L',
        long = "observing-location",
        num_args = 2,
        value_names = ["LAT", "LON"],
        allow_hyphen_values = true,
        global = true
    )]
    pub observing_location: Option<Vec<String>>,

    /// Offset of the observer's civil time from UTC, e.g. `+09:00`
    #[arg(long, allow_hyphen_values = true, global = true)]
    pub utc_offset: Option<String>,

    /// IANA time zone of the observer, e.g. `Australia/Sydney`; follows DST
    #[arg(long, global = true, conflicts_with = "utc_offset")]
    pub time_zone: Option<String>,

    /// Configuration file (defaults to ./skypos.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Altitude and azimuth of a star at a local time
    Locate(LocateArgs),

    /// Local time at which a star crosses the meridian
    Transit(TransitArgs),
}

#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// Right ascension, e.g. `5h56m19s` or `05:56:19`
    #[arg(long)]
    pub ra: String,

    /// Declination, e.g. `+7:24:33` or `-26°28'37"`
    #[arg(long, allow_hyphen_values = true)]
    pub dec: String,

    /// Local date and time, e.g. `2021-01-15T22:30:10`
    #[arg(long)]
    pub at: NaiveDateTime,
}

#[derive(Parser, Debug)]
pub struct TransitArgs {
    /// Right ascension, e.g. `5h56m19s` or `05:56:19`
    #[arg(long)]
    pub ra: String,

    /// Declination, e.g. `+7:24:33` or `-26°28'37"`
    #[arg(long, allow_hyphen_values = true)]
    pub dec: String,

    /// Local calendar date, e.g. `2021-01-15`
    #[arg(long)]
    pub date: NaiveDate,
}
