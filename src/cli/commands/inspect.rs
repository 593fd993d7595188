//! Inspect command implementation

use anyhow::{anyhow, Context, Result};
use clap::{ArgMatches, Command};
use tokio::io::AsyncReadExt;

use scout_crd::CustomResourceDefinition;

// Cap on pasted or piped content, matching the limit imposed on every
// non-filesystem content source.
const MAXIMUM_BYTES: usize = 200 * 1000; // 200KB

pub fn command() -> Command {
    Command::new("inspect")
        .about("Decode a single CRD manifest from a file or stdin")
        .arg(
            clap::Arg::new("file")
                .help("Manifest to decode, or '-' for stdin")
                .value_name("FILE")
                .required(true),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .context("FILE is required")?;

    let content = if file == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read standard input")?;
        buf
    } else {
        tokio::fs::read(file)
            .await
            .with_context(|| format!("failed to read file '{file}'"))?
    };

    ensure_within_limit(content.len())?;

    let crd = CustomResourceDefinition::from_slice(&content)?;

    println!("Name:    {}", crd.name());
    println!("Group:   {}", crd.group());
    println!("Kind:    {}", crd.kind_name());
    println!("Scope:   {}", crd.spec.scope);
    println!("Versions:");

    for version in crd.versions() {
        let mut notes = Vec::new();
        if version.served {
            notes.push("served");
        }
        if version.storage {
            notes.push("storage");
        }
        if version.deprecated {
            notes.push("deprecated");
        }
        if version.has_schema() {
            notes.push("schema");
        }

        if notes.is_empty() {
            println!("  - {}", version.name);
        } else {
            println!("  - {} ({})", version.name, notes.join(", "));
        }
    }

    Ok(())
}

fn ensure_within_limit(len: usize) -> Result<()> {
    if len > MAXIMUM_BYTES {
        return Err(anyhow!("content exceeds maximum length of 200KB"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_limit() {
        assert!(ensure_within_limit(0).is_ok());
        assert!(ensure_within_limit(MAXIMUM_BYTES).is_ok());
        assert!(ensure_within_limit(MAXIMUM_BYTES + 1).is_err());
    }
}
