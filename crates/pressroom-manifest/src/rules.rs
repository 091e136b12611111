//! Static pipeline declaration.
//!
//! The fixed, ordered table of (file pattern, processing chain) pairs the
//! bundler interprets. Patterns are intended to be disjoint per extension
//! class; no validation enforces that.

use serde::Serialize;

/// Default output name pattern for compiled templates. The bundler expands
/// `[name]` to the entry's own name when no article name is supplied.
pub const TEMPLATE_NAME_PATTERN: &str = "[name].html";

/// Hashed output name pattern for binary assets.
pub const STATIC_ASSET_PATTERN: &str = "static/[hash].[ext]";

/// Filename of the shared extracted stylesheet.
pub const MAIN_STYLESHEET: &str = "main.css";

/// One step of a processing chain.
#[derive(Debug, Clone, Serialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(skip_serializing_if = "LoaderOptions::is_empty")]
    pub options: LoaderOptions,
}

impl LoaderStep {
    fn bare(loader: &str) -> Self {
        Self {
            loader: loader.to_string(),
            options: LoaderOptions::default(),
        }
    }

    fn with(loader: &str, options: LoaderOptions) -> Self {
        Self {
            loader: loader.to_string(),
            options,
        }
    }
}

/// Step-specific options; unset fields are omitted from the manifest.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Output filename or naming pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_module: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,

    /// HTML attributes whose URLs get rewritten
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

impl LoaderOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.es_module.is_none()
            && self.public_path.is_none()
            && self.source_map.is_none()
            && self.attrs.is_empty()
    }
}

/// A file pattern and the ordered chain applied to matching files.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    pub test: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(rename = "use")]
    pub use_chain: Vec<LoaderStep>,
}

fn emit_step(name: Option<&str>) -> LoaderStep {
    LoaderStep::with(
        "file-loader",
        LoaderOptions {
            name: name.map(str::to_string),
            es_module: Some(false),
            public_path: Some("./".to_string()),
            ..Default::default()
        },
    )
}

/// The fixed rule table, in declaration order.
pub fn module_rules() -> Vec<Rule> {
    vec![
        Rule {
            test: r"\.js$".to_string(),
            exclude: vec!["node_modules".to_string()],
            use_chain: vec![LoaderStep::bare("script-loader")],
        },
        Rule {
            test: r"\.(ts|tsx)$".to_string(),
            exclude: vec!["node_modules".to_string()],
            use_chain: vec![LoaderStep::bare("ts-loader")],
        },
        Rule {
            test: r"\.css$".to_string(),
            exclude: vec![],
            use_chain: vec![
                emit_step(None),
                LoaderStep::bare("extract-loader"),
                LoaderStep::with(
                    "css-loader",
                    LoaderOptions {
                        source_map: Some(false),
                        ..Default::default()
                    },
                ),
            ],
        },
        Rule {
            test: r"\.less$".to_string(),
            exclude: vec![],
            use_chain: vec![
                emit_step(Some(MAIN_STYLESHEET)),
                LoaderStep::bare("extract-loader"),
                LoaderStep::with(
                    "css-loader",
                    LoaderOptions {
                        source_map: Some(false),
                        ..Default::default()
                    },
                ),
                LoaderStep::with(
                    "less-loader",
                    LoaderOptions {
                        source_map: Some(true),
                        ..Default::default()
                    },
                ),
            ],
        },
        Rule {
            test: r"\.pug$".to_string(),
            exclude: vec![],
            use_chain: vec![
                // The bundler resolves [name].html per asset via
                // query::template_output_name.
                LoaderStep::with(
                    "file-loader",
                    LoaderOptions {
                        name: Some(TEMPLATE_NAME_PATTERN.to_string()),
                        public_path: Some("./".to_string()),
                        ..Default::default()
                    },
                ),
                LoaderStep::bare("extract-loader"),
                LoaderStep::with(
                    "html-loader",
                    LoaderOptions {
                        attrs: vec!["img:src".to_string(), "link:href".to_string()],
                        public_path: Some("./".to_string()),
                        ..Default::default()
                    },
                ),
                LoaderStep::bare("pug-html-loader"),
            ],
        },
        Rule {
            test: r"\.(svg|jpe?g|woff2?|ttf|eot)".to_string(),
            exclude: vec![],
            use_chain: vec![emit_step(Some(STATIC_ASSET_PATTERN))],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declares_six_rules_in_order() {
        let rules = module_rules();

        let tests: Vec<&str> = rules.iter().map(|r| r.test.as_str()).collect();
        assert_eq!(
            tests,
            vec![
                r"\.js$",
                r"\.(ts|tsx)$",
                r"\.css$",
                r"\.less$",
                r"\.pug$",
                r"\.(svg|jpe?g|woff2?|ttf|eot)",
            ]
        );
    }

    #[test]
    fn stylesheet_chains_extract_then_process() {
        let rules = module_rules();
        let css = &rules[2];

        let loaders: Vec<&str> = css.use_chain.iter().map(|s| s.loader.as_str()).collect();
        assert_eq!(loaders, vec!["file-loader", "extract-loader", "css-loader"]);
        assert_eq!(css.use_chain[2].options.source_map, Some(false));
    }

    #[test]
    fn preprocessor_step_enables_source_maps() {
        let rules = module_rules();
        let less = &rules[3];

        assert_eq!(less.use_chain[0].options.name.as_deref(), Some("main.css"));
        assert_eq!(less.use_chain[2].options.source_map, Some(false));
        assert_eq!(less.use_chain[3].loader, "less-loader");
        assert_eq!(less.use_chain[3].options.source_map, Some(true));
    }

    #[test]
    fn template_chain_rewrites_asset_attrs() {
        let rules = module_rules();
        let pug = &rules[4];

        assert_eq!(pug.use_chain[0].options.name.as_deref(), Some("[name].html"));
        assert_eq!(pug.use_chain[2].loader, "html-loader");
        assert_eq!(pug.use_chain[2].options.attrs, vec!["img:src", "link:href"]);
        assert_eq!(pug.use_chain[3].loader, "pug-html-loader");
    }

    #[test]
    fn binary_assets_are_hashed_under_static() {
        let rules = module_rules();
        let assets = &rules[5];

        assert_eq!(
            assets.use_chain[0].options.name.as_deref(),
            Some("static/[hash].[ext]")
        );
    }

    #[test]
    fn empty_options_are_omitted_from_json() {
        let step = serde_json::to_value(LoaderStep::bare("extract-loader")).unwrap();

        assert_eq!(step, serde_json::json!({ "loader": "extract-loader" }));
    }
}
