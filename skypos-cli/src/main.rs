//! skypos: locate a star for an observer and find its meridian transit.

mod cli;
mod config;
mod locate;
mod transit;

use anyhow::Context;
use chrono::TimeZone;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, ObserverZone};
use flexi_logger::Logger;
use skypos_coords::StarLocator;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config_path = Config::find(cli.config.as_deref(), &cwd);
    let mut config = Config::load(config_path.as_deref())?;
    config.merge_cli(&cli);

    let _logger = Logger::try_with_env_or_str(&config.logging.level)
        .context("Invalid log level")?
        .log_to_stderr()
        .start()
        .context("Logger initialization failed")?;

    match &config_path {
        Some(path) => log::debug!("using config file {}", path.display()),
        None => log::debug!("no config file, using flags only"),
    }

    let resolved = config.resolve()?;
    log::info!("observer {} in {}", resolved.observer, resolved.zone);

    match resolved.zone {
        ObserverZone::Fixed(offset) => {
            dispatch(&cli.command, &StarLocator::new(offset, resolved.observer))
        }
        ObserverZone::Named(tz) => dispatch(&cli.command, &StarLocator::new(tz, resolved.observer)),
    }
}

fn dispatch<Tz: TimeZone>(command: &Commands, locator: &StarLocator<Tz>) -> anyhow::Result<()> {
    match command {
        Commands::Locate(args) => locate::run(args, locator),
        Commands::Transit(args) => transit::run(args, locator),
    }
}
