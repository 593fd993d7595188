//! Validate command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

use crate::cli::utils;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Locations: {}", config.locations.len());

    for location in &config.locations {
        if location.filters.is_empty() {
            println!("  - {} ({})", location.name, location.path);
        } else {
            println!(
                "  - {} ({}) filters: {}",
                location.name,
                location.path,
                location.filters.join(", ")
            );
        }
    }

    Ok(())
}
