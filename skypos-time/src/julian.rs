use chrono::{DateTime, Datelike, Timelike, Utc};
use skypos_core::constants::{
    DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, J2000_JD, MINUTES_PER_DAY, NANOSECONDS_PER_SECOND_F64,
    SECONDS_PER_DAY_F64,
};
use std::fmt;

/// A Julian date split into an integral day number and a day fraction.
///
/// `jd1` is the Julian day number of the civil date (the day starting at noon
/// UT), `jd2` the offset from that noon in days, so `jd2` is negative for
/// morning instants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    /// Gregorian calendar date and UT clock reading to Julian date.
    ///
    /// The day number uses truncating integer division throughout:
    ///
    /// ```text
    /// JDN = 1461*(Y+4800+(M-14)/12)/4 + 367*(M-2-12*((M-14)/12))/12
    ///       - 3*((Y+4900+(M-14)/12)/100)/4 + D - 32075
    /// JD  = JDN + (hour-12)/24 + minute/1440 + second/86400
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let m = month as i32;
        let a = (m - 14) / 12;
        let jdn = 1461 * (year + 4800 + a) / 4 + 367 * (m - 2 - 12 * a) / 12
            - 3 * ((year + 4900 + a) / 100) / 4
            + day as i32
            - 32075;

        let fraction = (hour as f64 - 12.0) / HOURS_PER_DAY
            + minute as f64 / MINUTES_PER_DAY
            + second / SECONDS_PER_DAY_F64;

        Self::new(jdn as f64, fraction)
    }

    /// Julian date of a UTC instant. Sub-second precision is kept.
    pub fn from_utc(instant: &DateTime<Utc>) -> Self {
        let second = instant.second() as f64
            + instant.nanosecond() as f64 / NANOSECONDS_PER_SECOND_F64;
        Self::from_calendar(
            instant.year(),
            instant.month(),
            instant.day(),
            instant.hour(),
            instant.minute(),
            second,
        )
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days elapsed since J2000.0 (JD 2451545.0).
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}
