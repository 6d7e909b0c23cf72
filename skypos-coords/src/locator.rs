//! Star positions for a fixed observer.
//!
//! [`StarLocator`] turns an equatorial position into altitude and azimuth for
//! a wall-clock reading in the observer's zone, and finds the clock time at
//! which a star crosses the local meridian.
//!
//! The chain for one lookup is:
//!
//! ```text
//! local time ─attach zone─► UTC ─► JD, T ─► GMST ─(+ east longitude)─► LST
//! H = LST - RA
//! alt = asin(sin δ sin φ + cos δ cos φ cos H)
//! az  = -atan2(cos δ sin H, -sin φ cos δ cos H + cos φ sin δ)   (+360 if < 0)
//! ```
//!
//! The zone is any [`chrono::TimeZone`]: `Utc`, a `FixedOffset`, or a
//! database-backed zone from another crate.

use crate::frames::{EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate};
use crate::CoordResult;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use log::{debug, trace};
use skypos_core::constants::{
    DEGREES_PER_HOUR, NANOSECONDS_PER_SECOND_F64, SECONDS_PER_HOUR,
};
use skypos_time::{attach_zone, sidereal_to_solar_rate, JulianDate, TimeError, GMST, LMST};

/// Wall-clock time the meridian search starts from.
const MERIDIAN_ANCHOR_HOUR: u32 = 23;

/// Computes star positions for one observer in one time zone.
///
/// Holds no mutable state; share it freely between threads when `Tz` allows.
///
/// ```
/// use chrono::{FixedOffset, NaiveDate};
/// use skypos_coords::{
///     EquatorialCoordinate, GeographicCoordinate, LatitudeDirection, LongitudeDirection,
///     StarLocator,
/// };
///
/// let tokyo = GeographicCoordinate::new(
///     Some(LatitudeDirection::North), 35, 42, 9.0,
///     Some(LongitudeDirection::East), 139, 44, 42.0,
/// )?;
/// let locator = StarLocator::new(FixedOffset::east_opt(9 * 3600).unwrap(), tokyo);
///
/// let betelgeuse = EquatorialCoordinate::new(5, 56, 19.0, 7, 24, 33.0)?;
/// let at = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap().and_hms_opt(22, 30, 10).unwrap();
///
/// let position = locator.locate_star(at, &betelgeuse)?;
/// assert!((position.alt_degrees() - 60.6725).abs() < 0.004);
/// # Ok::<(), skypos_coords::CoordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StarLocator<Tz: TimeZone> {
    time_zone: Tz,
    observer: GeographicCoordinate,
}

impl<Tz: TimeZone> StarLocator<Tz> {
    pub fn new(time_zone: Tz, observer: GeographicCoordinate) -> Self {
        Self {
            time_zone,
            observer,
        }
    }

    pub fn time_zone(&self) -> &Tz {
        &self.time_zone
    }

    pub fn observer(&self) -> &GeographicCoordinate {
        &self.observer
    }

    /// Altitude and azimuth of `star` at the local wall-clock time `local`.
    ///
    /// # Errors
    ///
    /// [`TimeError::NonexistentLocalTime`] if `local` falls in a DST gap of
    /// the zone. A horizontal range failure is passed through unchanged.
    pub fn locate_star(
        &self,
        local: NaiveDateTime,
        star: &EquatorialCoordinate,
    ) -> CoordResult<HorizontalCoordinate> {
        let jd = self.julian_date(local)?;
        let lst = self.local_sidereal_time(&jd);
        let hour_angle = lst.hour_angle(star.ra_degrees()).to_radians();

        let lat = self.observer.latitude().radians();
        let dec = star.declination().radians();

        let altitude = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos())
            .asin()
            .to_degrees();

        let mut azimuth = -(dec.cos() * hour_angle.sin())
            .atan2(-lat.sin() * dec.cos() * hour_angle.cos() + lat.cos() * dec.sin())
            .to_degrees();
        if azimuth < 0.0 {
            azimuth += 360.0;
        }

        trace!(
            "{}: LST={:.9}° H={:.9}° alt={:.9}° az={:.9}°",
            jd,
            lst.degrees(),
            lst.hour_angle(star.ra_degrees()),
            altitude,
            azimuth
        );

        let position = HorizontalCoordinate::from_degrees(altitude, azimuth)?;
        debug!("located {} at {} -> {}", star, local, position);
        Ok(position)
    }

    /// Local wall-clock time at which `star` crosses the meridian, searched
    /// from 23:00 on `date`.
    ///
    /// The offset from the anchor is one sidereal interval converted to solar
    /// time, so the result can land on the day before or after `date`.
    pub fn calculate_meridian_time(
        &self,
        date: NaiveDate,
        star: &EquatorialCoordinate,
    ) -> CoordResult<NaiveDateTime> {
        let anchor = date.and_time(
            NaiveTime::from_hms_opt(MERIDIAN_ANCHOR_HOUR, 0, 0)
                .ok_or_else(|| TimeError::overflow("invalid meridian anchor"))?,
        );
        let jd = self.julian_date(anchor)?;
        let t = jd.julian_centuries();
        let reference_lst = self.local_sidereal_time(&jd).reduced();

        let sidereal_nanos = (star.ra_degrees() - reference_lst) / DEGREES_PER_HOUR
            * SECONDS_PER_HOUR
            * NANOSECONDS_PER_SECOND_F64;
        let solar_nanos = sidereal_nanos / sidereal_to_solar_rate(t);

        trace!(
            "meridian anchor {}: LST={:.9}° interval={:.0}ns sidereal, {:.0}ns solar",
            anchor,
            reference_lst,
            sidereal_nanos,
            solar_nanos
        );

        if !solar_nanos.is_finite() || solar_nanos.abs() >= i64::MAX as f64 {
            return Err(TimeError::overflow(format!(
                "meridian offset of {} ns is not representable",
                solar_nanos
            ))
            .into());
        }

        let transit = anchor
            .checked_add_signed(Duration::nanoseconds(solar_nanos as i64))
            .ok_or_else(|| TimeError::overflow(format!("{} + {} ns", anchor, solar_nanos)))?;

        debug!("{} transits at {} on {}", star, transit, date);
        Ok(transit)
    }

    fn julian_date(&self, local: NaiveDateTime) -> CoordResult<JulianDate> {
        let zoned = attach_zone(&self.time_zone, local)?;
        Ok(JulianDate::from_utc(&zoned.with_timezone(&Utc)))
    }

    fn local_sidereal_time(&self, jd: &JulianDate) -> LMST {
        GMST::from_julian_date(jd).to_lmst(self.observer.long_degrees())
    }
}
