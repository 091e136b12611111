//! Build entry discovery and assembly.
//!
//! Scans the articles directory for immediate children and merges them with
//! the fixed `index` entry into the entry map the bundler builds from.

use std::collections::BTreeMap;

use serde::Serialize;
use walkdir::WalkDir;

use crate::layout::SiteLayout;

/// Name of the fixed entry every site carries.
pub const INDEX_ENTRY: &str = "index";

/// A single build entry pointing at its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Entry source file, relative to the project root
    pub import: String,
}

/// Mapping from entry name to its source entry file.
pub type EntryMap = BTreeMap<String, Entry>;

/// Errors raised while building the entry map.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Failed to scan articles directory {path}: {message}")]
    Scan { path: String, message: String },

    #[error("Article '{0}' collides with the reserved 'index' entry")]
    ReservedName(String),
}

/// Enumerate the immediate children of the articles directory as entries.
///
/// Every child counts as an article name; files and directories alike. Fails
/// if the directory cannot be opened.
pub fn discover_articles(layout: &SiteLayout) -> Result<EntryMap, EntryError> {
    let dir = layout.articles_path();

    if !dir.exists() {
        return Err(EntryError::Scan {
            path: dir.display().to_string(),
            message: "directory not found".to_string(),
        });
    }

    let mut articles = EntryMap::new();

    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| EntryError::Scan {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let import = layout.article_import(&name);
        articles.insert(name, Entry { import });
    }

    tracing::debug!("Discovered {} articles under {}", articles.len(), dir.display());

    Ok(articles)
}

/// Merge the fixed `index` entry with the discovered articles.
///
/// An article named `index` would shadow the fixed entry, so it is rejected
/// outright instead of silently overwriting.
pub fn assemble_entries(layout: &SiteLayout, articles: EntryMap) -> Result<EntryMap, EntryError> {
    if articles.contains_key(INDEX_ENTRY) {
        return Err(EntryError::ReservedName(INDEX_ENTRY.to_string()));
    }

    let mut entries = EntryMap::new();
    entries.insert(
        INDEX_ENTRY.to_string(),
        Entry {
            import: layout.index_import(),
        },
    );
    entries.extend(articles);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn layout_in(root: &std::path::Path) -> SiteLayout {
        SiteLayout {
            root: root.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn discovers_articles_and_assembles_entry_map() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());

        for name in ["a", "b", "c"] {
            fs::create_dir_all(layout.articles_path().join(name)).unwrap();
        }

        let articles = discover_articles(&layout).unwrap();
        let entries = assemble_entries(&layout, articles).unwrap();

        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "index"]);
        assert_eq!(entries["a"].import, "./src/articles/a/index.ts");
        assert_eq!(entries["index"].import, "./src/index.ts");
    }

    #[test]
    fn empty_articles_dir_yields_index_only() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::create_dir_all(layout.articles_path()).unwrap();

        let articles = discover_articles(&layout).unwrap();
        let entries = assemble_entries(&layout, articles).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries["index"].import, "./src/index.ts");
    }

    #[test]
    fn missing_articles_dir_fails() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());

        let err = discover_articles(&layout).unwrap_err();
        assert!(matches!(err, EntryError::Scan { .. }));
    }

    #[test]
    fn plain_files_count_as_articles() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::create_dir_all(layout.articles_path()).unwrap();
        fs::write(layout.articles_path().join("notes"), "").unwrap();

        let articles = discover_articles(&layout).unwrap();

        assert_eq!(articles["notes"].import, "./src/articles/notes/index.ts");
    }

    #[test]
    fn article_named_index_is_rejected() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::create_dir_all(layout.articles_path().join("index")).unwrap();

        let articles = discover_articles(&layout).unwrap();
        let err = assemble_entries(&layout, articles).unwrap_err();

        assert!(matches!(err, EntryError::ReservedName(name) if name == "index"));
    }

    #[test]
    fn discovery_is_idempotent() {
        let temp = tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::create_dir_all(layout.articles_path().join("first")).unwrap();
        fs::create_dir_all(layout.articles_path().join("second")).unwrap();

        let once = discover_articles(&layout).unwrap();
        let twice = discover_articles(&layout).unwrap();

        assert_eq!(once, twice);
    }
}
