//! Coinfind prefix search library.
//!
//! Answers incremental prefix queries over a small record set (currency
//! entries with a display name and a symbol).
//!
//! # Design
//!
//! - [`build`] turns one record-set snapshot into an immutable [`PrefixIndex`].
//!   Every prefix of the lower-cased name, of the symbol, and of each name
//!   word is precomputed, so a query is a single hash lookup.
//! - [`search`] borrows an index and returns [`SearchResults`] in bucket
//!   order (insertion order of the records at build time).
//! - An empty or whitespace-only query shows every record; an unknown
//!   prefix shows nothing.
//! - Indexes are never patched. When the record set changes (reload, filter
//!   switch) the caller builds a new one and swaps it in, see [`SharedIndex`].
//!
//! # Scaling
//!
//! Rebuilding on every change and deduplicating buckets by linear scan both
//! assume record sets of tens to low thousands of entries.

mod engine;
mod index;
pub mod normalize;
mod query;
mod results;
mod session;
mod shared;

pub use engine::search;
pub use index::{IndexStats, PrefixIndex, build};
pub use query::SearchQuery;
pub use results::{Iter, ResultKind, SearchResults};
pub use session::SearchSession;
pub use shared::{IndexSnapshot, SearchOutcome, SharedIndex};
