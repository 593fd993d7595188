//! Rendering of discovered CRDs

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use scout_crd::CustomResourceDefinition;

/// Output format for the rendered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown output format: {other}")),
        }
    }
}

/// Render the collection in the requested format.
pub fn render(crds: &[CustomResourceDefinition], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(crds)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(crds)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(crds)?),
    }
}

fn render_table(crds: &[CustomResourceDefinition]) -> String {
    let mut rows = vec![[
        "NAME".to_string(),
        "GROUP".to_string(),
        "KIND".to_string(),
        "SCOPE".to_string(),
        "VERSIONS".to_string(),
    ]];

    for crd in crds {
        let versions = crd
            .versions()
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(",");

        rows.push([
            crd.name().to_string(),
            crd.group().to_string(),
            crd.kind_name().to_string(),
            crd.spec.scope.to_string(),
            versions,
        ]);
    }

    let mut widths = [0usize; 5];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
