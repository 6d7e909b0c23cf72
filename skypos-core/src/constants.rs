pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// One hour of right ascension spans 15 degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const HOURS_PER_CIRCLE: f64 = 24.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_UNIT: f64 = 3600.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;
