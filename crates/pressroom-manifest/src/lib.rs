//! Bundler manifest assembly for static article sites.
//!
//! Discovers article directories, merges them with the fixed `index` entry,
//! and declares the processing pipeline and global options the external
//! bundler consumes.

pub mod entries;
pub mod layout;
pub mod manifest;
pub mod query;
pub mod rules;

pub use entries::{assemble_entries, discover_articles, Entry, EntryError, EntryMap, INDEX_ENTRY};
pub use layout::{BuildMode, SiteLayout};
pub use manifest::{Manifest, ManifestError, Plugin};
pub use query::{parse_resource_query, template_output_name, ARTICLE_NAME_PARAM};
pub use rules::{module_rules, LoaderOptions, LoaderStep, Rule};
