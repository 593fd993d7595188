//! Main configuration structure and implementation

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Locations to scan
    pub locations: Vec<LocationConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {path:?}"))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.locations.is_empty() {
            return Err(anyhow!("At least one location must be configured"));
        }

        for location in &self.locations {
            location.validate()?;
        }

        Ok(())
    }
}

/// A single location to scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Name of the location
    pub name: String,

    /// Root path to scan; supports `~` and environment variables
    pub path: String,

    /// Filters for discovered CRDs (API group/version glob patterns)
    #[serde(default)]
    pub filters: Vec<String>,
}

impl LocationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("location name cannot be empty"));
        }

        if self.path.is_empty() {
            return Err(anyhow!("location path cannot be empty"));
        }

        Ok(())
    }

    /// The scan root with `~` and environment variables expanded
    pub fn expanded_path(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.path)
            .map_err(|e| anyhow!("failed to expand location path '{}': {}", self.path, e))?;

        Ok(PathBuf::from(expanded.as_ref()))
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendering format for scan results
    #[serde(default)]
    pub format: OutputFormat,
}
