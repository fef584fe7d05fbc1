//! One snapshot of both record lists.
//!
//! The catalog is what the storage collaborator hands over at load time and
//! after every write. Searching never happens here; callers pick a
//! [`ListFilter`], take the filtered records, and build an index from them.

use crate::error::Result;
use crate::types::{ListFilter, ListType, Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    crypto: Vec<Record>,
    fiat: Vec<Record>,
}

impl Catalog {
    pub fn new(crypto: Vec<Record>, fiat: Vec<Record>) -> Self {
        Self { crypto, fiat }
    }

    /// Parses a `{ "crypto": [...], "fiat": [...] }` snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(
            crypto = catalog.crypto.len(),
            fiat = catalog.fiat.len(),
            "parsed catalog snapshot"
        );
        Ok(catalog)
    }

    pub fn list(&self, list_type: ListType) -> &[Record] {
        match list_type {
            ListType::Crypto => &self.crypto,
            ListType::Fiat => &self.fiat,
        }
    }

    /// Replaces one list wholesale.
    pub fn set_list(&mut self, list_type: ListType, records: Vec<Record>) {
        match list_type {
            ListType::Crypto => self.crypto = records,
            ListType::Fiat => self.fiat = records,
        }
    }

    /// Records selected by `filter`, in display order (`All` is crypto then fiat).
    pub fn records(&self, filter: ListFilter) -> Vec<Record> {
        filter
            .list_types()
            .iter()
            .flat_map(|list_type| self.list(*list_type).iter().cloned())
            .collect()
    }

    /// Which list a record id belongs to. Crypto wins if an id appears in both.
    pub fn list_type_of(&self, id: &RecordId) -> Option<ListType> {
        ListType::ALL
            .into_iter()
            .find(|list_type| self.list(*list_type).iter().any(|r| r.id() == id))
    }

    pub fn len(&self) -> usize {
        self.crypto.len() + self.fiat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests;
