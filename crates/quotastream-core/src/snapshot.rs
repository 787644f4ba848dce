use crate::types::TableOid;
use derive_more::{Deref, DerefMut};
use std::collections::{BTreeMap, btree_map};

///
/// SizeEntry
///

/// One measured table: identifier plus size in bytes.
pub type SizeEntry = (TableOid, u64);

///
/// SizeSnapshot
///
/// Frozen table → size mapping captured once per stream.
///
/// Keys are unique and the contents never change after capture: a stream
/// iterates the snapshot it was given, not the live state of the size
/// source. The snapshot is owned exclusively by its stream and released
/// when the stream drains or is dropped.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct SizeSnapshot(BTreeMap<TableOid, u64>);

impl SizeSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of entries, saturated to the informational `u32` row count.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }

    /// Consume the snapshot into its single-pass entry iterator.
    #[must_use]
    pub fn into_entries(self) -> IntoEntries {
        IntoEntries(self.0.into_iter())
    }
}

impl From<BTreeMap<TableOid, u64>> for SizeSnapshot {
    fn from(map: BTreeMap<TableOid, u64>) -> Self {
        Self(map)
    }
}

impl FromIterator<SizeEntry> for SizeSnapshot {
    fn from_iter<I: IntoIterator<Item = SizeEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// IntoEntries
///
/// Consuming iterator over a snapshot's entries, ascending by table oid.
/// Owns the snapshot storage; dropping it releases the snapshot.
///

#[derive(Debug)]
pub struct IntoEntries(btree_map::IntoIter<TableOid, u64>);

impl Iterator for IntoEntries {
    type Item = SizeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IntoEntries {}

///
/// TESTS
///
