//! Search query types.

/// A normalized query.
///
/// Parsing trims and lower-cases the raw input. A query that trims to
/// nothing means "show everything", which is distinct from a prefix that
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty or whitespace-only input.
    ShowAll,
    /// Lower-cased, trimmed prefix looked up as a single index key.
    Prefix(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchQuery::ShowAll
        } else {
            SearchQuery::Prefix(trimmed.to_lowercase())
        }
    }

    /// The index key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            SearchQuery::ShowAll => None,
            SearchQuery::Prefix(key) => Some(key),
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
