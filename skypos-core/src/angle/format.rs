//! Sexagesimal formatting for angles.
//!
//! Formatters render the subdivision triples an [`Angle`] already carries, so
//! an angle built from `(44, 22, 36.0)` prints exactly those parts. The sign
//! is written once in front and the parts are shown as magnitudes.
//!
//! ```
//! use skypos_core::Angle;
//! use skypos_core::angle::{DmsFmt, HmsFmt};
//!
//! let dec = Angle::from_dms(-26, -28, -37.0)?;
//! assert_eq!(DmsFmt { frac_digits: 0 }.fmt(dec), "-26° 28' 37\"");
//!
//! let ra = Angle::from_hms(16, 30, 40.0)?;
//! assert_eq!(HmsFmt { frac_digits: 1 }.fmt(ra), "16ʰ 30ᵐ 40.0ˢ");
//! # Ok::<(), skypos_core::SkyError>(())
//! ```
//!
//! The `Display` impl shows both views with their decimal values:
//!
//! ```
//! use skypos_core::Angle;
//!
//! let a = Angle::from_dms(44, 22, 36.0)?;
//! assert_eq!(
//!     a.to_string(),
//!     "44°22'36.0000\" (44.3767°), 2h57m30.4000s (2.9584h)"
//! );
//! # Ok::<(), skypos_core::SkyError>(())
//! ```

use super::{Angle, Subdivisions};
use core::fmt;

/// Formatter for degrees-minutes-seconds notation: `±DD° MM' SS.ss"`.
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// Formatter for hours-minutes-seconds notation: `HHʰ MMᵐ SS.ssˢ`.
///
/// Negative angles get a leading `-`; nothing is wrapped.
pub struct HmsFmt {
    pub frac_digits: u8,
}

fn split_sign(parts: Subdivisions) -> (&'static str, Subdivisions) {
    if parts.is_negative() {
        ("-", parts.abs())
    } else {
        ("", parts)
    }
}

impl DmsFmt {
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let (sign, p) = split_sign(a.dms());
        let sign = if sign.is_empty() { "+" } else { sign };
        format!(
            "{sign}{}° {}' {:.*}\"",
            p.major(),
            p.minor(),
            self.frac_digits as usize,
            p.seconds()
        )
    }
}

impl HmsFmt {
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let (sign, p) = split_sign(a.hms());
        format!(
            "{sign}{}ʰ {}ᵐ {:.*}ˢ",
            p.major(),
            p.minor(),
            self.frac_digits as usize,
            p.seconds()
        )
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dsign, d) = split_sign(self.dms());
        let (hsign, h) = split_sign(self.hms());
        write!(
            f,
            "{}{}°{}'{:.4}\" ({:.4}°), {}{}h{}m{:.4}s ({:.4}h)",
            dsign,
            d.major(),
            d.minor(),
            d.seconds(),
            self.degrees(),
            hsign,
            h.major(),
            h.minor(),
            h.seconds(),
            self.hours()
        )
    }
}
