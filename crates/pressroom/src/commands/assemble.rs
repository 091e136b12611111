//! Manifest assembly command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pressroom_manifest::Manifest;

use crate::config::ConfigFile;

/// Run the assemble command.
pub async fn run(config: &Path, output: Option<PathBuf>, compact: bool) -> Result<()> {
    let layout = ConfigFile::load(config)?.into_layout();

    let manifest = Manifest::assemble(&layout).context("Failed to assemble manifest")?;
    let json = manifest.to_json(!compact)?;

    tracing::info!("Assembled {} entries", manifest.entry.len());

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote manifest to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
