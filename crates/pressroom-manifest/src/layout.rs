//! Site source-tree layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build mode passed through to the bundler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

/// Filesystem layout of the site source tree.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// Project root the source tree is resolved against
    pub root: PathBuf,

    /// Source directory, relative to the project root
    pub source_dir: String,

    /// Articles directory inside the source directory
    pub articles_dir: String,

    /// Bundler output directory
    pub output_dir: String,

    /// Pre-built static assets copied verbatim into the output root
    pub static_assets_dir: String,

    /// Build mode
    pub mode: BuildMode,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dir: "src".to_string(),
            articles_dir: "articles".to_string(),
            output_dir: "dist".to_string(),
            static_assets_dir: "src/dist".to_string(),
            mode: BuildMode::default(),
        }
    }
}

impl SiteLayout {
    /// Absolute-ish path of the articles directory.
    pub fn articles_path(&self) -> PathBuf {
        self.root.join(&self.source_dir).join(&self.articles_dir)
    }

    /// Import path of the fixed `index` entry.
    pub fn index_import(&self) -> String {
        format!("./{}/index.ts", self.source_dir)
    }

    /// Import path of an article's entry file.
    pub fn article_import(&self, name: &str) -> String {
        format!("./{}/{}/{}/index.ts", self.source_dir, self.articles_dir, name)
    }
}
