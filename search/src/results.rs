//! Search results types.

use crate::index::{PrefixIndex, Slot};
use coinfind_core::types::Record;
use std::slice;

/// How a result set came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Blank query: every record, in original order.
    All,
    /// The prefix matched at least one record.
    Matches,
    /// The prefix matched nothing.
    NoMatches,
}

/// Result set that borrows from the index it was produced by.
///
/// Use `iter()` to walk matched records without collecting.
#[derive(Debug, Clone, Copy)]
pub struct SearchResults<'a> {
    pub(crate) index: &'a PrefixIndex,
    pub(crate) hits: Hits<'a>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Hits<'a> {
    All,
    Bucket(&'a [Slot]),
    Empty,
}

impl<'a> SearchResults<'a> {
    pub fn kind(&self) -> ResultKind {
        match self.hits {
            Hits::All => ResultKind::All,
            Hits::Bucket(_) => ResultKind::Matches,
            Hits::Empty => ResultKind::NoMatches,
        }
    }

    /// Iterates over matched records in bucket order.
    pub fn iter(&self) -> Iter<'a> {
        let inner = match self.hits {
            Hits::All => IterInner::All(self.index.records().iter()),
            Hits::Bucket(slots) => IterInner::Slots(slots.iter()),
            Hits::Empty => IterInner::Slots(slice::Iter::default()),
        };
        Iter {
            index: self.index,
            inner,
        }
    }

    pub fn len(&self) -> usize {
        match self.hits {
            Hits::All => self.index.len(),
            Hits::Bucket(slots) => slots.len(),
            Hits::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clones the matched records out of the index.
    pub fn to_vec(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &SearchResults<'a> {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`SearchResults`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    index: &'a PrefixIndex,
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    All(slice::Iter<'a, Record>),
    Slots(slice::Iter<'a, Slot>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::All(records) => records.next(),
            IterInner::Slots(slots) => slots.next().map(|&slot| self.index.resolve(slot)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::All(records) => records.size_hint(),
            IterInner::Slots(slots) => slots.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
