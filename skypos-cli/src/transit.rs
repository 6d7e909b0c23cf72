use crate::cli::TransitArgs;
use crate::locate::{parse_star, render};
use chrono::TimeZone;
use skypos_coords::StarLocator;

pub fn run<Tz: TimeZone>(args: &TransitArgs, locator: &StarLocator<Tz>) -> anyhow::Result<()> {
    let star = parse_star(&args.ra, &args.dec)?;
    let transit = locator.calculate_meridian_time(args.date, &star)?;
    let position = locator.locate_star(transit, &star)?;

    println!("Meridian transit: {}", transit.format("%Y-%m-%d %H:%M:%S"));
    println!("{}", render(&position));
    Ok(())
}
