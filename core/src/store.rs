//! Seam to the record storage collaborator.
//!
//! Persistent stores live outside this workspace. [`MemoryStore`] keeps
//! both lists in process and backs the tests and the CLI.

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::types::{ListType, Record};
use std::collections::HashMap;
use std::sync::RwLock;

/// Load/save/clear operations over the two record lists.
pub trait RecordStore: Send + Sync {
    /// Returns the stored list, empty if nothing was saved.
    fn load(&self, list_type: ListType) -> Result<Vec<Record>>;

    /// Replaces the stored list.
    fn save(&self, list_type: ListType, records: Vec<Record>) -> Result<()>;

    /// Deletes both lists.
    fn clear_all(&self) -> Result<()>;

    /// Loads both lists into one snapshot.
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(
            self.load(ListType::Crypto)?,
            self.load(ListType::Fiat)?,
        ))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: RwLock<HashMap<ListType, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from an existing snapshot.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let lists = ListType::ALL
            .into_iter()
            .map(|list_type| (list_type, catalog.list(list_type).to_vec()))
            .collect();
        Self {
            lists: RwLock::new(lists),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, list_type: ListType) -> Result<Vec<Record>> {
        let lists = self
            .lists
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(lists.get(&list_type).cloned().unwrap_or_default())
    }

    fn save(&self, list_type: ListType, records: Vec<Record>) -> Result<()> {
        let mut lists = self
            .lists
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::debug!(%list_type, count = records.len(), "saving list");
        lists.insert(list_type, records);
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let mut lists = self
            .lists
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::debug!("clearing all lists");
        lists.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
