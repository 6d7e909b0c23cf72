//! Angle parsing from string representations.
//!
//! Sexagesimal input is split into its three parts and handed to
//! [`Angle::from_subdivisions`], so a parsed angle keeps the exact parts the
//! user typed:
//!
//! ```text
//! Colon-separated:  12:34:56.789
//! Letter markers:   12h34m56.789s  or  45d30m15s
//! Symbol notation:  45°30'15"
//! ```
//!
//! A leading sign applies to every part: `-0:30:00` becomes `(0, -30, -0.0)`.
//! Signs anywhere else are rejected.
//!
//! ```
//! use skypos_core::angle::AngleUnits;
//!
//! let ra = "5h56m19s".hms()?;
//! assert_eq!((ra.hour(), ra.minute()), (5, 56));
//!
//! let dec = "-26:28:37".dms()?;
//! assert_eq!((dec.degree(), dec.arc_minute()), (-26, -28));
//!
//! let alt = "30.5".deg()?;
//! assert_eq!(alt.degrees(), 30.5);
//! # Ok::<(), skypos_core::SkyError>(())
//! ```

use super::{Angle, AngleKind};
use crate::errors::{InvalidInputKind, SkyError, SkyResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Parse strings as angles with an explicit unit.
pub trait AngleUnits {
    /// Parse as decimal degrees.
    fn deg(&self) -> SkyResult<Angle>;
    /// Parse as decimal hours (1 hour = 15 degrees).
    fn hours(&self) -> SkyResult<Angle>;
    /// Parse degrees:minutes:seconds, falling back to decimal degrees.
    fn dms(&self) -> SkyResult<Angle>;
    /// Parse hours:minutes:seconds, falling back to decimal hours.
    fn hms(&self) -> SkyResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> SkyResult<Angle> {
        parse_decimal(self).map(Angle::from_degrees)
    }

    #[inline]
    fn hours(&self) -> SkyResult<Angle> {
        parse_decimal(self).map(Angle::from_hours)
    }

    fn dms(&self) -> SkyResult<Angle> {
        parse_dms(self).or_else(|err| parse_decimal(self).map(Angle::from_degrees).map_err(|_| err))
    }

    fn hms(&self) -> SkyResult<Angle> {
        parse_hms(self).or_else(|err| parse_decimal(self).map(Angle::from_hours).map_err(|_| err))
    }
}

fn malformed(operation: &str, message: String) -> SkyError {
    SkyError::invalid_input(operation, InvalidInputKind::Malformed, &message)
}

fn parse_decimal(s: &str) -> SkyResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| malformed("parse_decimal", format!("Cannot parse '{}' as number", s)))
}

static COLON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*([+-])?(\d{1,3})\s*:\s*(\d{1,2})\s*:\s*(\d{1,2}(?:\.\d+)?)\s*$"#)
        .expect("colon pattern is valid")
});

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?                  # optional sign
        (\d{1,3})\s*[hHʰ]\s*     # hours
        (\d{1,2})\s*[mMᵐ]\s*     # minutes
        (\d{1,2}(?:\.\d+)?)      # seconds with optional decimal
        \s*[sSˢ]?
        \s*$
        "#,
    )
    .expect("hms pattern is valid")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?                  # optional sign
        (\d{1,3})\s*[dD°]\s*     # degrees
        (\d{1,2})\s*[mM']\s*     # arcminutes
        (\d{1,2}(?:\.\d+)?)      # arcseconds with optional decimal
        \s*(?:[sS"]|'')?
        \s*$
        "#,
    )
    .expect("dms pattern is valid")
});

/// Parse a string as hours-minutes-seconds, e.g. `05:56:19` or `5h56m19s`.
pub fn parse_hms(s: &str) -> SkyResult<Angle> {
    let caps = COLON_REGEX
        .captures(s)
        .or_else(|| HMS_REGEX.captures(s))
        .ok_or_else(|| malformed("parse_hms", format!("Cannot parse '{}' as HMS format", s)))?;
    from_captures("parse_hms", AngleKind::Hour, &caps)
}

/// Parse a string as degrees-minutes-seconds, e.g. `-26:28:37` or `45°30'15"`.
pub fn parse_dms(s: &str) -> SkyResult<Angle> {
    let caps = COLON_REGEX
        .captures(s)
        .or_else(|| DMS_REGEX.captures(s))
        .ok_or_else(|| malformed("parse_dms", format!("Cannot parse '{}' as DMS format", s)))?;
    from_captures("parse_dms", AngleKind::Degree, &caps)
}

fn from_captures(operation: &str, kind: AngleKind, caps: &regex::Captures) -> SkyResult<Angle> {
    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -1,
        _ => 1,
    };
    let major: i32 = caps[2]
        .parse()
        .map_err(|_| malformed(operation, format!("invalid major part '{}'", &caps[2])))?;
    let minor: i32 = caps[3]
        .parse()
        .map_err(|_| malformed(operation, format!("invalid minor part '{}'", &caps[3])))?;
    let seconds: f64 = caps[4]
        .parse()
        .map_err(|_| malformed(operation, format!("invalid seconds part '{}'", &caps[4])))?;

    if minor >= 60 || seconds >= 60.0 {
        return Err(SkyError::invalid_input(
            operation,
            InvalidInputKind::OutOfRange,
            "minutes and seconds must be in range [0, 60)",
        ));
    }

    Angle::from_subdivisions(kind, sign * major, sign * minor, sign as f64 * seconds)
}
