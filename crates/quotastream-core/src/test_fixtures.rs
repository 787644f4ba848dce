use crate::{
    snapshot::SizeSnapshot,
    source::{HostEnv, SourceError, TableSizeSource},
    types::{ExecutionRole, SegmentId, TableOid},
};
use std::cell::{Cell, RefCell};

///
/// MapSource
///
/// Size source backed by mutable full/active entry lists. Each computation
/// snapshots the list as of the call, so tests can mutate the source
/// mid-stream and assert snapshot isolation. Invocations are counted.
///

pub(crate) struct MapSource {
    full: RefCell<Vec<(u32, u64)>>,
    active: RefCell<Vec<(u32, u64)>>,
    pub(crate) full_calls: Cell<u32>,
    pub(crate) active_calls: Cell<u32>,
}

impl MapSource {
    pub(crate) fn new(full: &[(u32, u64)], active: &[(u32, u64)]) -> Self {
        Self {
            full: RefCell::new(full.to_vec()),
            active: RefCell::new(active.to_vec()),
            full_calls: Cell::new(0),
            active_calls: Cell::new(0),
        }
    }

    /// Replace the active entry list, as a refresh in the host would.
    pub(crate) fn set_active(&self, entries: &[(u32, u64)]) {
        *self.active.borrow_mut() = entries.to_vec();
    }

    pub(crate) fn calls(&self) -> u32 {
        self.full_calls.get() + self.active_calls.get()
    }

    fn snapshot_of(entries: &[(u32, u64)]) -> SizeSnapshot {
        entries
            .iter()
            .map(|&(oid, size)| (TableOid::new(oid), size))
            .collect()
    }
}

impl TableSizeSource for MapSource {
    fn compute_full_sizes(&self) -> Result<SizeSnapshot, SourceError> {
        self.full_calls.set(self.full_calls.get() + 1);
        Ok(Self::snapshot_of(&self.full.borrow()))
    }

    fn compute_active_sizes(&self) -> Result<SizeSnapshot, SourceError> {
        self.active_calls.set(self.active_calls.get() + 1);
        Ok(Self::snapshot_of(&self.active.borrow()))
    }
}

///
/// FailingSource
/// Size source whose computations always fail.
///

pub(crate) struct FailingSource {
    message: &'static str,
}

impl FailingSource {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl TableSizeSource for FailingSource {
    fn compute_full_sizes(&self) -> Result<SizeSnapshot, SourceError> {
        Err(SourceError::new(self.message))
    }

    fn compute_active_sizes(&self) -> Result<SizeSnapshot, SourceError> {
        Err(SourceError::new(self.message))
    }
}

///
/// FixedHost
/// Host environment with a fixed role and segment identity.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedHost {
    role: ExecutionRole,
    segment: SegmentId,
}

impl FixedHost {
    pub(crate) const fn coordinator(segment: i32) -> Self {
        Self {
            role: ExecutionRole::Coordinator,
            segment: SegmentId::new(segment),
        }
    }

    pub(crate) const fn with_role(role: ExecutionRole, segment: i32) -> Self {
        Self {
            role,
            segment: SegmentId::new(segment),
        }
    }
}

impl HostEnv for FixedHost {
    fn execution_role(&self) -> ExecutionRole {
        self.role
    }

    fn segment_id(&self) -> SegmentId {
        self.segment
    }
}
