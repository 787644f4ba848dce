use crate::stream::AcquisitionMode;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for stat-stream lifecycle events.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StreamCounters {
    // Lifecycle
    pub streams_started: u64,
    pub streams_drained: u64,
    pub streams_abandoned: u64,

    // Rows
    pub rows_emitted: u64,

    // Failures
    pub permission_denied: u64,
    pub acquire_failures: u64,
    pub protocol_violations: u64,

    // Per-mode breakdowns
    pub full: ModeCounters,
    pub active_only: ModeCounters,
}

impl StreamCounters {
    fn mode_mut(&mut self, mode: AcquisitionMode) -> &mut ModeCounters {
        match mode {
            AcquisitionMode::Full => &mut self.full,
            AcquisitionMode::ActiveOnly => &mut self.active_only,
        }
    }
}

///
/// ModeCounters
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct ModeCounters {
    pub streams_started: u64,
    pub rows_emitted: u64,
    pub acquire_failures: u64,
}

thread_local! {
    static STREAM_STATE: RefCell<StreamCounters> = RefCell::new(StreamCounters::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&StreamCounters) -> R) -> R {
    STREAM_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut StreamCounters) -> R) -> R {
    STREAM_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = StreamCounters::default());
}

/// Record one stream start in the given mode.
pub(crate) fn record_stream_started(mode: AcquisitionMode) {
    with_state_mut(|m| {
        m.streams_started = m.streams_started.saturating_add(1);
        let entry = m.mode_mut(mode);
        entry.streams_started = entry.streams_started.saturating_add(1);
    });
}

/// Record one emitted row in the given mode.
pub(crate) fn record_row_emitted(mode: AcquisitionMode) {
    with_state_mut(|m| {
        m.rows_emitted = m.rows_emitted.saturating_add(1);
        let entry = m.mode_mut(mode);
        entry.rows_emitted = entry.rows_emitted.saturating_add(1);
    });
}

/// Record one stream reaching natural exhaustion.
pub(crate) fn record_stream_drained() {
    with_state_mut(|m| m.streams_drained = m.streams_drained.saturating_add(1));
}

/// Record one stream dropped before exhaustion.
pub(crate) fn record_stream_abandoned() {
    with_state_mut(|m| m.streams_abandoned = m.streams_abandoned.saturating_add(1));
}

/// Record one role-gate rejection.
pub(crate) fn record_permission_denied() {
    with_state_mut(|m| m.permission_denied = m.permission_denied.saturating_add(1));
}

/// Record one acquisition failure in the given mode.
pub(crate) fn record_acquire_failure(mode: AcquisitionMode) {
    with_state_mut(|m| {
        m.acquire_failures = m.acquire_failures.saturating_add(1);
        let entry = m.mode_mut(mode);
        entry.acquire_failures = entry.acquire_failures.saturating_add(1);
    });
}

/// Record one resumption of an already-drained stream.
pub(crate) fn record_protocol_violation() {
    with_state_mut(|m| m.protocol_violations = m.protocol_violations.saturating_add(1));
}

///
/// StreamReport
/// Counter report plus per-mode averages for observability surfaces.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StreamReport {
    pub counters: StreamCounters,
    pub mode_summaries: Vec<ModeSummary>,
}

///
/// ModeSummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ModeSummary {
    pub mode: String,
    pub streams_started: u64,
    pub rows_emitted: u64,
    pub acquire_failures: u64,
    pub avg_rows_per_stream: f64,
}

impl ModeSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_counters(mode: AcquisitionMode, ops: ModeCounters) -> Self {
        let avg = if ops.streams_started > 0 {
            ops.rows_emitted as f64 / ops.streams_started as f64
        } else {
            0.0
        };

        Self {
            mode: mode.as_str().to_string(),
            streams_started: ops.streams_started,
            rows_emitted: ops.rows_emitted,
            acquire_failures: ops.acquire_failures,
            avg_rows_per_stream: avg,
        }
    }
}

/// Build a metrics report by inspecting in-memory counters only.
#[must_use]
pub fn report() -> StreamReport {
    let snap = with_state(Clone::clone);

    let mode_summaries = vec![
        ModeSummary::from_counters(AcquisitionMode::ActiveOnly, snap.active_only),
        ModeSummary::from_counters(AcquisitionMode::Full, snap.full),
    ];

    StreamReport {
        counters: snap,
        mode_summaries,
    }
}

///
/// TESTS
///
