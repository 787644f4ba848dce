//! Quotastream — resumable per-table disk-usage stat streaming for
//! disk-quota monitoring.
//!
//! ## Crate layout
//! - `core`: runtime snapshot model, the stream state machine, collaborator
//!   seams, and observability counters.
//! - `error`: the stable public error taxonomy exposed to host surfaces.
//!
//! The `prelude` module mirrors the runtime surface used by host code.

pub use quotastream_core as core;

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Runtime surface used by host code: traits, the executor, and the
/// domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        Error,
        core::{
            source::{HostEnv, TableSizeSource},
            stream::{AcquisitionMode, StatRow, StatStream, StatStreamExecutor, StreamStep},
            types::{ExecutionRole, SegmentId, TableOid},
        },
    };
}
