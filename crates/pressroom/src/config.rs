//! Configuration file loading (pressroom.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use pressroom_manifest::{BuildMode, SiteLayout};
use serde::Deserialize;

/// Configuration file structure (pressroom.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    site: SiteSection,

    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_source")]
    source: String,

    #[serde(default = "default_articles")]
    articles: String,

    #[serde(default = "default_output")]
    output: String,

    /// Pre-built assets copied verbatim into the output root
    #[serde(default = "default_static_assets")]
    static_assets: String,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSection {
    #[serde(default)]
    mode: BuildMode,
}

fn default_source() -> String {
    "src".to_string()
}
fn default_articles() -> String {
    "articles".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_static_assets() -> String {
    "src/dist".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            articles: default_articles(),
            output: default_output(),
            static_assets: default_static_assets(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from the given path if it exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let config: ConfigFile = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(ConfigFile::default())
    }

    /// Convert into the layout the assembler works with.
    pub fn into_layout(self) -> SiteLayout {
        SiteLayout {
            source_dir: self.site.source,
            articles_dir: self.site.articles,
            output_dir: self.site.output,
            static_assets_dir: self.site.static_assets,
            mode: self.build.mode,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let layout = ConfigFile::load(&temp.path().join("pressroom.toml"))
            .unwrap()
            .into_layout();

        assert_eq!(layout.source_dir, "src");
        assert_eq!(layout.articles_dir, "articles");
        assert_eq!(layout.output_dir, "dist");
        assert_eq!(layout.static_assets_dir, "src/dist");
        assert_eq!(layout.mode, BuildMode::Development);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pressroom.toml");
        fs::write(&path, "[site]\noutput = \"public\"\n\n[build]\nmode = \"production\"\n")
            .unwrap();

        let layout = ConfigFile::load(&path).unwrap().into_layout();

        assert_eq!(layout.output_dir, "public");
        assert_eq!(layout.source_dir, "src");
        assert_eq!(layout.mode, BuildMode::Production);
    }

    #[test]
    fn malformed_file_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pressroom.toml");
        fs::write(&path, "[site\n").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }
}
