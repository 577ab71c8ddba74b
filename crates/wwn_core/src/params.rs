use serde::Deserialize;

/// Query parameters as they arrive from an untrusted caller, all optional
/// strings. Unknown keys are ignored on deserialization; values that fail
/// validation downstream (unparseable dates, unknown sort keys) disable
/// the corresponding behavior instead of erroring.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Free-text search term, matched case-sensitively.
    pub q: Option<String>,
    /// Lower date bound, textual.
    pub from: Option<String>,
    /// Upper date bound, textual.
    pub to: Option<String>,
    /// Requested sort field; must be on the allow-list to take effect.
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let params: QueryParams =
            serde_json::from_str(r#"{"q": "bitcoin", "page": "3", "apiKey": "x"}"#).unwrap();
        assert_eq!(params.q.as_deref(), Some("bitcoin"));
        assert!(params.from.is_none());
        assert!(params.sort_by.is_none());
    }

    #[test]
    fn sort_by_uses_the_camel_case_wire_name() {
        let params: QueryParams = serde_json::from_str(r#"{"sortBy": "title"}"#).unwrap();
        assert_eq!(params.sort_by.as_deref(), Some("title"));
    }

    #[test]
    fn default_is_all_absent() {
        let params = QueryParams::default();
        assert!(params.q.is_none() && params.from.is_none() && params.to.is_none());
        assert!(params.sort_by.is_none());
    }
}
