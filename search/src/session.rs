//! Search state for one list screen.

use crate::shared::{SearchOutcome, SharedIndex};
use coinfind_core::Catalog;
use coinfind_core::types::ListFilter;

/// Keeps the index in step with the selected record set.
///
/// Holds the latest catalog, the active filter, and the current query.
/// Any change to the records (filter switch or reload) rebuilds the index
/// before the next query runs, so results never come from a stale index.
#[derive(Debug)]
pub struct SearchSession {
    catalog: Catalog,
    filter: ListFilter,
    query: String,
    index: SharedIndex,
}

/// Create operations.
impl SearchSession {
    pub fn new(catalog: Catalog, filter: ListFilter) -> Self {
        let index = SharedIndex::new(catalog.records(filter));
        tracing::info!(%filter, records = catalog.len(), "search session started");

        Self {
            catalog,
            filter,
            query: String::new(),
            index,
        }
    }
}

/// Record-set changes.
impl SearchSession {
    /// Switches the record set. Rebuilds only when the filter actually changes.
    pub fn set_filter(&mut self, filter: ListFilter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.rebuild("filter switch");
    }

    /// Replaces the catalog after a store write or clear, then rebuilds.
    pub fn reload(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.rebuild("reload");
    }

    fn rebuild(&mut self, reason: &str) {
        let generation = self.index.rebuild(self.catalog.records(self.filter));
        tracing::info!(reason, filter = %self.filter, generation, "rebuilt search index");
    }
}

/// Query operations.
impl SearchSession {
    /// Remembers the raw query; it is normalized when results are read.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to showing every record.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Runs the current query against the current index.
    pub fn results(&self) -> SearchOutcome {
        self.index.search(&self.query)
    }
}

/// Accessors.
impl SearchSession {
    pub fn filter(&self) -> ListFilter {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generation(&self) -> u64 {
        self.index.generation()
    }

    /// Shared handle for readers on other threads.
    pub fn handle(&self) -> &SharedIndex {
        &self.index
    }
}
