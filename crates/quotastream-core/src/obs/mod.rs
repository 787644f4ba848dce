//! Observability: ephemeral runtime counters for stat-stream activity.
//!
//! This module never touches snapshots or size sources directly; stream
//! logic reports events through the `record_*` helpers.

pub mod metrics;

// re-exports
pub use metrics::{ModeSummary, StreamReport, report, reset};
