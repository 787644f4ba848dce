use crate::{
    snapshot::SizeEntry,
    types::{SegmentId, TableOid},
};
use serde::{Deserialize, Serialize};

///
/// StatRow
///
/// One emitted row of the stat stream, in the stable three-column shape
/// (TABLE_OID, SEGMENT_ID, TABLE_SIZE). Field order matches the column
/// order consumers bind against.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatRow {
    pub table_oid: TableOid,
    pub segment_id: SegmentId,
    pub table_size: u64,
}

/// Materialize one snapshot entry as a stat row.
///
/// Total and side-effect-free; the segment identity is the one captured at
/// stream start, identical across every row of the stream.
#[must_use]
pub(crate) const fn emit_row(entry: SizeEntry, segment: SegmentId) -> StatRow {
    let (table_oid, table_size) = entry;

    StatRow {
        table_oid,
        segment_id: segment,
        table_size,
    }
}

///
/// TESTS
///
