use serde::{Deserialize, Serialize};
use std::fmt;

///
/// TableOid
///
/// Opaque identifier of one measured table.
/// The stream never interprets it; it is carried from the size source
/// into the emitted row unchanged.
///

#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct TableOid(u32);

impl TableOid {
    #[must_use]
    pub const fn new(oid: u32) -> Self {
        Self(oid)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TableOid {
    fn from(oid: u32) -> Self {
        Self(oid)
    }
}

///
/// SegmentId
///
/// Identity of the node reporting sizes. Supplied by the host environment
/// at stream start and attached verbatim to every row of that stream.
///

#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct SegmentId(i32);

impl SegmentId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SegmentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

///
/// ExecutionRole
/// Execution context of the caller attempting to start a stream.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionRole {
    /// The coordinating node; the only role permitted to stream sizes.
    Coordinator,
    /// A worker executing dispatched fragments.
    WorkerExecution,
    /// A maintenance/utility connection outside the cluster plane.
    Utility,
}

impl fmt::Display for ExecutionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Coordinator => "coordinator",
            Self::WorkerExecution => "worker_execution",
            Self::Utility => "utility",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
