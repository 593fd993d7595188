//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("crd-scout")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Discover Kubernetes CRD manifests in YAML trees")
            .subcommand(commands::scan::command())
            .subcommand(commands::inspect::command())
            .subcommand(commands::validate::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("scan", sub_matches)) => commands::scan::run(sub_matches).await,
            Some(("inspect", sub_matches)) => commands::inspect::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        // Look for default config files
        let mut default_paths = vec![
            PathBuf::from(".crd-scout.yaml"),
            PathBuf::from("crd-scout.yaml"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            default_paths.push(config_dir.join("crd-scout").join("config.yaml"));
        }

        for path in &default_paths {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        Err(anyhow!(
            "No configuration file found. Use --config to specify a file or pass a location to scan"
        ))
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        crate::Config::from_file(&config_path)
    }
}
