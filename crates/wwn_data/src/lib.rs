//! The bundled article index. Stands in for the third-party news API the
//! demo never calls: a JSON snapshot embedded at compile time, parsed once
//! and shared read-only for the life of the process.

use std::sync::OnceLock;

use wwn_core::{Article, Error, Result};

const RAW_INDEX: &str = include_str!("../articles.json");

static INDEX: OnceLock<Vec<Article>> = OnceLock::new();

/// The full article index. First call parses the embedded snapshot; later
/// calls return the same slice.
pub fn articles() -> Result<&'static [Article]> {
    if let Some(index) = INDEX.get() {
        return Ok(index);
    }

    let parsed: Vec<Article> = serde_json::from_str(RAW_INDEX)?;
    if parsed.is_empty() {
        return Err(Error::Dataset("embedded article index is empty".to_string()));
    }

    Ok(INDEX.get_or_init(|| parsed))
}
