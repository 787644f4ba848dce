//! Core runtime for Quotastream: per-table size snapshots, the resumable
//! stat stream, collaborator seams, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod obs;
pub mod snapshot;
pub mod source;
pub mod stream;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Number of columns in one emitted stat row.
///
/// The row shape (TABLE_OID, SEGMENT_ID, TABLE_SIZE) is a stable contract
/// with the consumers of the stream; widening it is a breaking change.
pub const STAT_ROW_COLUMNS: usize = 3;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or observability helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        snapshot::{SizeEntry, SizeSnapshot},
        source::{HostEnv, TableSizeSource},
        stream::{AcquisitionMode, StatRow, StatStream, StreamStep},
        types::{ExecutionRole, SegmentId, TableOid},
    };
}
