//! Article query engine: filter a fixed article index by search term and
//! date bounds, then optionally sort by an allow-listed field.
//!
//! Every input is untrusted text and every failure degrades silently:
//! an unparseable date disables that bound and an unknown sort key
//! disables sorting. The engine is a pure function over its inputs and
//! never mutates the index.

mod date;
mod sort;

pub use sort::SortKey;

use chrono::{DateTime, Utc};
use tracing::debug;
use wwn_core::{Article, QueryParams};

/// Runs `params` against `articles` and returns the matching records in a
/// fresh list. Filter order follows input order; sorting, when requested
/// with a valid key, is stable so ties keep their input order.
pub fn query(articles: &[Article], params: &QueryParams) -> Vec<Article> {
    let term = params.q.as_deref().filter(|t| !t.is_empty());
    let from = bound("from", params.from.as_deref());
    let to = bound("to", params.to.as_deref());

    let mut matches: Vec<Article> = articles
        .iter()
        .filter(|article| {
            if let Some(term) = term {
                if !matches_search(term, article) {
                    return false;
                }
            }
            matches_date(article, to, from)
        })
        .cloned()
        .collect();

    if let Some(raw) = params.sort_by.as_deref().filter(|s| !s.is_empty()) {
        match SortKey::parse(raw) {
            Some(key) => sort::sort_articles(key, &mut matches),
            None => debug!(key = raw, "unknown sort key, leaving filter order"),
        }
    }

    matches
}

fn bound(side: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let parsed = date::parse_loose(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        debug!(side, value = raw, "unparseable date bound, ignoring it");
    }
    parsed
}

/// Case-sensitive substring match over every searchable text field.
fn matches_search(term: &str, article: &Article) -> bool {
    if article.title.contains(term) {
        return true;
    }
    if article.author.as_deref().is_some_and(|author| author.contains(term)) {
        return true;
    }
    match &article.source {
        Some(source) => {
            source.id.as_deref().is_some_and(|id| id.contains(term))
                || source.name.contains(term)
        }
        None => false,
    }
}

/// Date predicate. With no active bound everything passes. Otherwise the
/// article's own timestamp must parse, and the bounds combine as a union
/// of one-sided checks: strictly before `to`, or strictly after `from`.
/// Supplying both does NOT mean "between from and to"; an article after
/// `from` passes even when it is also after `to`. Known upstream
/// behavior, kept as is and pinned by tests.
fn matches_date(
    article: &Article,
    to: Option<DateTime<Utc>>,
    from: Option<DateTime<Utc>>,
) -> bool {
    if to.is_none() && from.is_none() {
        return true;
    }

    let Some(published) = date::parse_loose(&article.published_at) else {
        return false;
    };

    let mut matches = false;
    if let Some(to) = to {
        matches = matches || published < to;
    }
    if let Some(from) = from {
        matches = matches || published > from;
    }
    matches
}
