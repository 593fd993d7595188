//! Scan command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

use scout_crd::{CrdScanner, CustomResourceDefinition};

use crate::cli::utils;
use crate::filter;
use crate::output::{self, OutputFormat};

pub fn command() -> Command {
    Command::new("scan")
        .about("Scan a location for CRD manifests")
        .arg(
            clap::Arg::new("location")
                .help("Root folder (or single file) to scan")
                .value_name("LOCATION"),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path, used when no location is given")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("filter")
                .short('f')
                .long("filter")
                .help("Keep only CRDs matching this group/version glob (repeatable)")
                .value_name("PATTERN")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output format: table, yaml or json")
                .value_name("FORMAT"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let cli_filters: Vec<String> = matches
        .get_many::<String>("filter")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut format = OutputFormat::default();
    let mut crds: Vec<CustomResourceDefinition> = Vec::new();

    if let Some(location) = matches.get_one::<String>("location") {
        info!("Scanning {}", location);

        let found = CrdScanner::new(location).scan()?;
        crds.extend(filter::retain_matching(found, &cli_filters));
    } else {
        let config = utils::load_config(matches)?;
        format = config.output.format;

        for location in &config.locations {
            let root = location.expanded_path()?;
            info!("Scanning location '{}' at {:?}", location.name, root);

            let found = CrdScanner::new(&root).scan()?;
            let found = filter::retain_matching(found, &location.filters);
            crds.extend(filter::retain_matching(found, &cli_filters));
        }
    }

    if let Some(requested) = matches.get_one::<String>("output") {
        format = requested.parse()?;
    }

    print!("{}", output::render(&crds, format)?);
    eprintln!("Found {} CRDs", crds.len());

    Ok(())
}
