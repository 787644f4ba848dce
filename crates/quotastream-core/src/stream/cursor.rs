use crate::{
    obs,
    snapshot::{IntoEntries, SizeSnapshot},
    stream::{AcquisitionMode, StatRow, row::emit_row},
    types::SegmentId,
};
use thiserror::Error as ThisError;

///
/// ProtocolError
/// Contract violations by the stream's caller.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ProtocolError {
    /// The stream already signalled end-of-stream and must not be resumed.
    #[error("stat stream resumed after end-of-stream ({emitted} rows already emitted)")]
    ResumedAfterDrain { emitted: u32 },
}

///
/// StreamStep
/// Outcome of one successful resumption.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamStep {
    /// One stat row; further resumptions may follow.
    Row(StatRow),
    /// End-of-stream marker; the snapshot has been released.
    Done,
}

///
/// StreamState
///

#[derive(Debug)]
enum StreamState {
    /// Snapshot live; entries may remain.
    Active(IntoEntries),
    /// Terminal. The snapshot is gone and the stream must not be resumed.
    Drained,
}

///
/// StatStream
///
/// The continuation handle for one stat stream, carried by the caller
/// across resumption calls.
///
/// Owns its snapshot for the stream's whole lifetime and releases it
/// exactly once: at the resumption that finds it exhausted, or on drop if
/// the caller abandons the stream early.
///

#[derive(Debug)]
pub struct StatStream {
    mode: AcquisitionMode,
    segment: SegmentId,
    expected: u32,
    emitted: u32,
    state: StreamState,
}

impl StatStream {
    pub(crate) fn new(snapshot: SizeSnapshot, segment: SegmentId, mode: AcquisitionMode) -> Self {
        let expected = snapshot.row_count();

        Self {
            mode,
            segment,
            expected,
            emitted: 0,
            state: StreamState::Active(snapshot.into_entries()),
        }
    }

    /// Acquisition mode the stream was started with.
    #[must_use]
    pub const fn mode(&self) -> AcquisitionMode {
        self.mode
    }

    /// Segment identity attached to every row of this stream.
    #[must_use]
    pub const fn segment_id(&self) -> SegmentId {
        self.segment
    }

    /// Entry count captured at stream start.
    ///
    /// Informational; callers may use it to size their result buffers.
    #[must_use]
    pub const fn expected_rows(&self) -> u32 {
        self.expected
    }

    /// Rows emitted so far.
    #[must_use]
    pub const fn emitted_rows(&self) -> u32 {
        self.emitted
    }

    /// True once end-of-stream has been signalled.
    #[must_use]
    pub const fn is_drained(&self) -> bool {
        matches!(self.state, StreamState::Drained)
    }

    /// One resumption: the next row, or the end-of-stream marker.
    ///
    /// The resumption that finds the snapshot exhausted releases it,
    /// signals `Done` exactly once, and leaves the stream terminal; any
    /// resumption after that fails with [`ProtocolError::ResumedAfterDrain`].
    pub fn next_row(&mut self) -> Result<StreamStep, ProtocolError> {
        let StreamState::Active(entries) = &mut self.state else {
            obs::metrics::record_protocol_violation();
            return Err(ProtocolError::ResumedAfterDrain {
                emitted: self.emitted,
            });
        };

        match entries.next() {
            Some(entry) => {
                self.emitted = self.emitted.saturating_add(1);
                obs::metrics::record_row_emitted(self.mode);

                Ok(StreamStep::Row(emit_row(entry, self.segment)))
            }
            None => {
                // Exactly-once release: replacing the state drops the iterator
                // and with it the snapshot storage.
                self.state = StreamState::Drained;
                obs::metrics::record_stream_drained();

                Ok(StreamStep::Done)
            }
        }
    }

    /// Resume to completion and collect the remaining rows.
    pub fn drain(&mut self) -> Result<Vec<StatRow>, ProtocolError> {
        let remaining = self.expected.saturating_sub(self.emitted);
        let mut rows = Vec::with_capacity(remaining as usize);

        loop {
            match self.next_row()? {
                StreamStep::Row(row) => rows.push(row),
                StreamStep::Done => return Ok(rows),
            }
        }
    }
}

impl Drop for StatStream {
    fn drop(&mut self) {
        // Early abandonment: the snapshot is released here, without the
        // stream ever reaching its drained transition.
        if matches!(self.state, StreamState::Active(_)) {
            obs::metrics::record_stream_abandoned();
        }
    }
}

///
/// TESTS
///
