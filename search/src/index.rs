//! Prefix index over one record-set snapshot.

use crate::normalize::{normalize_name, normalize_symbol, prefixes, tokens};
use coinfind_core::types::{Record, RecordId};
use std::collections::HashMap;
use std::iter;

/// Position of a distinct record id in the index's id table.
pub(crate) type Slot = usize;

/// Size counters for one built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Records supplied to the builder, duplicates included.
    pub records: usize,
    pub distinct_ids: usize,
    /// Distinct prefix keys.
    pub keys: usize,
    /// Sum of bucket lengths.
    pub postings: usize,
}

/// Immutable inverted prefix index.
///
/// Maps every non-empty prefix of a record's lower-cased display name,
/// symbol, and name words to the ids that produced it. Buckets keep first
/// insertion order and hold each id once. The index owns the records it was
/// built from so results can be materialized without the caller's copy.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    /// Records in the order they were supplied.
    records: Vec<Record>,
    /// Slot -> position in `records` of the last record carrying that id.
    resolved: Vec<usize>,
    slots: HashMap<RecordId, Slot>,
    postings: HashMap<Box<str>, Vec<Slot>>,
}

/// Builds an index from one record-set snapshot.
pub fn build<I>(records: I) -> PrefixIndex
where
    I: IntoIterator<Item = Record>,
{
    PrefixIndex::build(records)
}

impl PrefixIndex {
    /// Builds an index from one record-set snapshot.
    ///
    /// Never fails. Duplicate ids are tolerated: buckets still hold the id
    /// once and the later record wins when the id is resolved.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let records: Vec<Record> = records.into_iter().collect();
        let mut resolved: Vec<usize> = Vec::with_capacity(records.len());
        let mut slots: HashMap<RecordId, Slot> = HashMap::with_capacity(records.len());
        let mut postings: HashMap<Box<str>, Vec<Slot>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let slot = match slots.get(record.id()) {
                Some(&slot) => {
                    tracing::debug!(id = %record.id(), "duplicate record id, later record wins");
                    resolved[slot] = position;
                    slot
                }
                None => {
                    let slot = resolved.len();
                    resolved.push(position);
                    slots.insert(record.id().clone(), slot);
                    slot
                }
            };

            let name = normalize_name(record.display_name());
            let symbol = normalize_symbol(record.symbol());
            let indexable = iter::once(name.as_str())
                .chain(iter::once(symbol.as_str()))
                .chain(tokens(&name));

            for token in indexable {
                for prefix in prefixes(token) {
                    register(&mut postings, prefix, slot);
                }
            }
        }

        let index = Self {
            records,
            resolved,
            slots,
            postings,
        };

        let stats = index.stats();
        tracing::debug!(
            records = stats.records,
            distinct_ids = stats.distinct_ids,
            keys = stats.keys,
            postings = stats.postings,
            "built prefix index"
        );

        index
    }

    /// Number of records supplied at build time.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in their original order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by id. For duplicated ids this is the later record.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.slots.get(id).map(|&slot| self.resolve(slot))
    }

    /// Whether `key` (already normalized) is an indexed prefix.
    pub fn contains_key(&self, key: &str) -> bool {
        self.postings.contains_key(key)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            distinct_ids: self.resolved.len(),
            keys: self.postings.len(),
            postings: self.postings.values().map(Vec::len).sum(),
        }
    }

    pub(crate) fn bucket(&self, key: &str) -> Option<&[Slot]> {
        self.postings.get(key).map(Vec::as_slice)
    }

    /// Maps a slot back to its record.
    ///
    /// # Panics
    ///
    /// Panics if the slot is unknown. Slots only come from this index's own
    /// buckets, so a miss means the index is corrupt and results can't be trusted.
    pub(crate) fn resolve(&self, slot: Slot) -> &Record {
        self.resolved
            .get(slot)
            .and_then(|&position| self.records.get(position))
            .unwrap_or_else(|| {
                panic!(
                    "prefix index invariant violated: slot {slot} of {} has no record",
                    self.resolved.len()
                )
            })
    }
}

fn register(postings: &mut HashMap<Box<str>, Vec<Slot>>, prefix: &str, slot: Slot) {
    match postings.get_mut(prefix) {
        Some(bucket) => {
            if !bucket.contains(&slot) {
                bucket.push(slot);
            }
        }
        None => {
            postings.insert(prefix.into(), vec![slot]);
        }
    }
}
