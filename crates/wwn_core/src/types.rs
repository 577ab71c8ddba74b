use serde::{Deserialize, Serialize};

/// One record of the article index. Loaded once at startup and never
/// mutated; queries clone matching records into a fresh list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub author: Option<String>,
    pub source: Option<Source>,
    /// Raw timestamp text as it arrived from upstream. Not guaranteed to
    /// parse; the query layer parses it lazily and rejects the record from
    /// date-bounded queries when it cannot.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub url: String,
    #[serde(rename = "urlToImage", default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Publisher of an article. The capitalized JSON names are part of the
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
}
