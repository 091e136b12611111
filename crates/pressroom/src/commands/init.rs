//! Scaffold a new site source tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing pressroom site...");

    // Create default config
    let config_path = Path::new("pressroom.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write pressroom.toml")?;
        tracing::info!("Created pressroom.toml");
    }

    let src = Path::new("src");
    fs::create_dir_all(src.join("articles")).context("Failed to create src/articles")?;
    fs::create_dir_all(src.join("dist")).context("Failed to create src/dist")?;

    // Create the fixed index entry
    let index_path = src.join("index.ts");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_INDEX).context("Failed to write src/index.ts")?;
        tracing::info!("Created src/index.ts");
    }

    // Create an example article
    let article_dir = src.join("articles").join("hello-world");
    fs::create_dir_all(&article_dir).context("Failed to create example article")?;

    let files = [
        ("index.ts", DEFAULT_ARTICLE_SCRIPT),
        ("index.pug", DEFAULT_ARTICLE_TEMPLATE),
        ("style.less", DEFAULT_ARTICLE_STYLE),
    ];

    for (name, content) in files {
        let path = article_dir.join(name);
        if !path.exists() || yes {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created src/articles/hello-world/{}", name);
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'pressroom assemble' to emit the bundler manifest.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Pressroom Configuration

[site]
# Source directory
source = "src"

# Articles directory inside the source directory
articles = "articles"

# Bundler output directory
output = "dist"

# Pre-built assets copied verbatim into the output root
static_assets = "src/dist"

[build]
# Build mode: "development" or "production"
mode = "development"
"#;

const DEFAULT_INDEX: &str = r#"console.log('pressroom site');
"#;

const DEFAULT_ARTICLE_SCRIPT: &str = r#"import './index.pug?articleName=hello-world';
import './style.less';
"#;

const DEFAULT_ARTICLE_TEMPLATE: &str = r#"html
  head
    title Hello World
    link(rel='stylesheet' href='main.css')
  body
    h1 Hello World
    p Your first article.
"#;

const DEFAULT_ARTICLE_STYLE: &str = r#"@text: #222;

body {
  color: @text;
  font-family: sans-serif;
}
"#;
