use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use wwn_core::Article;

/// Sortable fields. The allow-list and the accessors live in the same
/// enum so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    PublishedAt,
}

impl SortKey {
    /// Maps a raw `sortBy` value onto a key. `pubishedAt` is a historical
    /// client spelling kept as an alias for `publishedAt`. Anything else
    /// is `None` and the caller skips sorting.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "publishedAt" | "pubishedAt" => Some(Self::PublishedAt),
            _ => None,
        }
    }

    /// The comparable value of this field, with absent and empty strings
    /// collapsed into `None` so they sort together after present values.
    fn field<'a>(self, article: &'a Article) -> Option<&'a str> {
        let value = match self {
            Self::Title => Some(article.title.as_str()),
            Self::Author => article.author.as_deref(),
            Self::PublishedAt => Some(article.published_at.as_str()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Stable sort by `key`: equal keys keep their input order, absent and
/// empty values go last.
pub(crate) fn sort_articles(key: SortKey, articles: &mut [Article]) {
    let collator = Collator::try_new(&locale!("en").into(), CollatorOptions::new()).ok();
    articles.sort_by(|a, b| compare(key, collator.as_ref(), a, b));
}

fn compare(key: SortKey, collator: Option<&Collator>, a: &Article, b: &Article) -> Ordering {
    match (key.field(a), key.field(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => collate(collator, left, right),
    }
}

/// Locale-aware comparison, so `apple < Banana` and accented letters sort
/// next to their base letter rather than by code point. Falls back to
/// plain ordering if collation data is unavailable.
fn collate(collator: Option<&Collator>, left: &str, right: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(left, right),
        None => left.cmp(right),
    }
}
