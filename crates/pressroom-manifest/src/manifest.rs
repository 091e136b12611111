//! Manifest assembly.
//!
//! Stitches the entry map, rule table, plugin list, and global options into
//! the single configuration object the external bundler consumes.

use serde::Serialize;

use crate::entries::{assemble_entries, discover_articles, EntryError, EntryMap};
use crate::layout::{BuildMode, SiteLayout};
use crate::rules::{module_rules, Rule, MAIN_STYLESHEET};

/// A declared bundler plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// CSS minification post-processing
    OptimizeCssAssets,

    /// Pre-build cleanup of the output directory
    Clean { output: String },

    /// Build progress reporting
    Progress,

    /// Extraction of styles into the shared stylesheet
    CssExtract { filename: String },

    /// Verbatim copy of pre-built static assets into the output root
    Copy { from: String, to: String },
}

/// Module rule table.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSection {
    pub rules: Vec<Rule>,
}

/// Module resolution settings.
#[derive(Debug, Clone, Serialize)]
pub struct Resolve {
    /// Recognized source extensions, in priority order
    pub extensions: Vec<String>,
}

/// Post-processing settings.
#[derive(Debug, Clone, Serialize)]
pub struct Optimization {
    pub minimizer: Vec<String>,
}

/// The complete configuration consumed by the external bundler.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub mode: BuildMode,
    pub entry: EntryMap,
    pub plugins: Vec<Plugin>,
    pub module: ModuleSection,
    pub resolve: Resolve,
    pub optimization: Optimization,
}

/// Errors that can occur while assembling or serializing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Manifest {
    /// Assemble a manifest, discovering articles from the filesystem.
    pub fn assemble(layout: &SiteLayout) -> Result<Self, ManifestError> {
        let articles = discover_articles(layout)?;
        Self::with_articles(layout, articles)
    }

    /// Assemble a manifest from a pre-built article map.
    pub fn with_articles(layout: &SiteLayout, articles: EntryMap) -> Result<Self, ManifestError> {
        let entry = assemble_entries(layout, articles)?;

        Ok(Self {
            mode: layout.mode,
            entry,
            plugins: vec![
                Plugin::OptimizeCssAssets,
                Plugin::Clean {
                    output: layout.output_dir.clone(),
                },
                Plugin::Progress,
                Plugin::CssExtract {
                    filename: MAIN_STYLESHEET.to_string(),
                },
                Plugin::Copy {
                    from: format!("{}/", layout.static_assets_dir),
                    to: "./".to_string(),
                },
            ],
            module: ModuleSection {
                rules: module_rules(),
            },
            resolve: Resolve {
                extensions: [".tsx", ".ts", ".js"].map(str::to_string).to_vec(),
            },
            optimization: Optimization {
                minimizer: vec!["terser".to_string()],
            },
        })
    }

    /// Serialize to the JSON document the bundler reads.
    pub fn to_json(&self, pretty: bool) -> Result<String, ManifestError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(json)
    }
}
