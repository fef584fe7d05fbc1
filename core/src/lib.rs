pub mod catalog;
pub mod error;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result, StoreError, ValidationError};
pub use store::{MemoryStore, RecordStore};
