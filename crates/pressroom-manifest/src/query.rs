//! Resource-query decoding and template output naming.
//!
//! A resource query is the per-asset suffix string carrying extra metadata
//! through a processing chain; here it names an article's output HTML file.

use std::collections::BTreeMap;

/// Query parameter carrying an article's intended output name.
pub const ARTICLE_NAME_PARAM: &str = "articleName";

/// Decode a resource query into a flat parameter map.
///
/// Accepts input with or without a leading `?`. A pair with no `=` maps its
/// key to the empty string; duplicate keys are last-write-wins; percent
/// sequences that fail to decode fall back to the raw value. Never errors.
pub fn parse_resource_query(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());

        params.insert(key.to_string(), value);
    }

    params
}

/// Resolve the output filename for a compiled template.
///
/// A non-empty `articleName` query parameter wins; otherwise the entry's own
/// name is used.
pub fn template_output_name(resource_query: &str, entry_name: &str) -> String {
    let params = parse_resource_query(resource_query);

    let name = match params.get(ARTICLE_NAME_PARAM).filter(|n| !n.is_empty()) {
        Some(article) => format!("{article}.html"),
        None => format!("{entry_name}.html"),
    };

    tracing::debug!(query = resource_query, name = %name, "Resolved template output name");

    name
}
