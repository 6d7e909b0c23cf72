use crate::cli::LocateArgs;
use anyhow::Context;
use chrono::TimeZone;
use skypos_coords::{EquatorialCoordinate, HorizontalCoordinate, StarLocator};
use skypos_core::angle::{AngleUnits, DmsFmt};

pub fn run<Tz: TimeZone>(args: &LocateArgs, locator: &StarLocator<Tz>) -> anyhow::Result<()> {
    let star = parse_star(&args.ra, &args.dec)?;
    let position = locator.locate_star(args.at, &star)?;
    println!("{}", render(&position));
    Ok(())
}

pub fn parse_star(ra: &str, dec: &str) -> anyhow::Result<EquatorialCoordinate> {
    let ra_angle = ra
        .hms()
        .with_context(|| format!("invalid right ascension '{}'", ra))?;
    let dec_angle = dec
        .dms()
        .with_context(|| format!("invalid declination '{}'", dec))?;
    Ok(EquatorialCoordinate::from_angles(ra_angle, dec_angle)?)
}

pub fn render(position: &HorizontalCoordinate) -> String {
    let fmt = DmsFmt { frac_digits: 1 };
    format!(
        "Altitude: {} ({:.6}°){}\nAzimuth:  {} ({:.6}°)",
        fmt.fmt(position.altitude()),
        position.alt_degrees(),
        if position.is_above_horizon() {
            ""
        } else {
            "  below horizon"
        },
        fmt.fmt(position.azimuth()),
        position.az_degrees()
    )
}
