//! Layout validation command.

use std::path::Path;

use anyhow::{Context, Result};
use pressroom_manifest::{discover_articles, Manifest};

use crate::config::ConfigFile;

/// Run the check command.
pub async fn run(config: &Path) -> Result<()> {
    let layout = ConfigFile::load(config)?.into_layout();

    let articles = discover_articles(&layout).context("Article discovery failed")?;

    tracing::info!(
        "Discovered {} articles under {}",
        articles.len(),
        layout.articles_path().display()
    );

    for name in articles.keys() {
        tracing::debug!("Article: {}", name);
    }

    let manifest = Manifest::with_articles(&layout, articles)?;

    tracing::info!("Entry map: {} entries", manifest.entry.len());
    tracing::info!("Output directory: {}", layout.output_dir);
    tracing::info!("Static assets copied from: {}/", layout.static_assets_dir);
    tracing::info!("Layout OK");

    Ok(())
}
