//! Rebuild-and-swap handle around the current index.

use crate::index::PrefixIndex;
use crate::query::SearchQuery;
use crate::results::ResultKind;
use arc_swap::ArcSwap;
use coinfind_core::types::Record;
use std::sync::{Arc, Mutex, PoisonError};

/// A built index tagged with the rebuild that produced it.
#[derive(Debug)]
pub struct IndexSnapshot {
    generation: u64,
    index: PrefixIndex,
}

impl IndexSnapshot {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}

/// Owned result of a query against a [`SharedIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Generation of the snapshot that answered the query.
    pub generation: u64,
    pub kind: ResultKind,
    pub records: Vec<Record>,
}

/// Holds the current index and swaps in a fresh one on every rebuild.
///
/// Readers never block: a query loads the current snapshot and keeps using
/// it even if a rebuild lands meanwhile. Rebuilds never patch an index in
/// place; they build a new one and replace the pointer.
#[derive(Debug)]
pub struct SharedIndex {
    current: ArcSwap<IndexSnapshot>,
    /// Serializes swaps so generations stay monotonic.
    swap_lock: Mutex<()>,
}

impl SharedIndex {
    /// Builds generation 0 from the initial snapshot.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        Self {
            current: ArcSwap::from_pointee(IndexSnapshot {
                generation: 0,
                index: PrefixIndex::build(records),
            }),
            swap_lock: Mutex::new(()),
        }
    }

    /// The snapshot queries currently run against.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.current.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }

    /// Whether results tagged with `generation` still reflect the current records.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Discards the current index and swaps in one built from `records`.
    /// Returns the new generation.
    pub fn rebuild<I>(&self, records: I) -> u64
    where
        I: IntoIterator<Item = Record>,
    {
        let index = PrefixIndex::build(records);

        let _guard = self
            .swap_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let generation = self.current.load().generation + 1;
        self.current
            .store(Arc::new(IndexSnapshot { generation, index }));

        tracing::debug!(generation, "swapped in rebuilt index");
        generation
    }

    /// Runs `query` against the current snapshot.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let snapshot = self.current.load();
        let results = snapshot.index.search(&SearchQuery::parse(query));

        SearchOutcome {
            generation: snapshot.generation,
            kind: results.kind(),
            records: results.to_vec(),
        }
    }
}
