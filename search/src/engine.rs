//! Query engine over a built [`PrefixIndex`].

use crate::index::PrefixIndex;
use crate::query::SearchQuery;
use crate::results::{Hits, SearchResults};

/// Runs one query against an index.
///
/// The query is trimmed and lower-cased. A blank query returns every record
/// in original order; otherwise the normalized text is looked up as a single
/// key and the bucket is returned in insertion order. Never mutates the index.
pub fn search<'a>(index: &'a PrefixIndex, query: &str) -> SearchResults<'a> {
    index.search(&SearchQuery::parse(query))
}

impl PrefixIndex {
    /// Runs an already parsed query against this index.
    pub fn search(&self, query: &SearchQuery) -> SearchResults<'_> {
        let hits = match query {
            SearchQuery::ShowAll => Hits::All,
            SearchQuery::Prefix(key) => match self.bucket(key) {
                Some(slots) => Hits::Bucket(slots),
                None => Hits::Empty,
            },
        };
        let results = SearchResults { index: self, hits };

        tracing::trace!(
            query = query.key().unwrap_or(""),
            results = results.len(),
            kind = ?results.kind(),
            "search"
        );

        results
    }
}
