mod acquire;
mod cursor;
mod guard;
mod row;


pub use acquire::{AcquireError, AcquisitionMode};
pub use cursor::{ProtocolError, StatStream, StreamStep};
pub use guard::PermissionError;
pub use row::StatRow;

use crate::{
    obs,
    source::{HostEnv, TableSizeSource},
};
use thiserror::Error as ThisError;

///
/// StreamError
///

#[derive(Debug, ThisError)]
pub enum StreamError {
    #[error(transparent)]
    PermissionError(#[from] PermissionError),

    #[error(transparent)]
    AcquireError(#[from] AcquireError),

    #[error(transparent)]
    ProtocolError(#[from] ProtocolError),
}

///
/// StatStreamExecutor
///
/// Stream entry point: gates access, acquires the snapshot, and hands the
/// caller the continuation handle. Runs once per stream; resumptions go
/// through [`StatStream::next_row`] alone.
///

pub struct StatStreamExecutor<'a, S, H> {
    source: &'a S,
    host: &'a H,
    debug: bool,
}

impl<'a, S, H> StatStreamExecutor<'a, S, H>
where
    S: TableSizeSource,
    H: HostEnv,
{
    #[must_use]
    pub const fn new(source: &'a S, host: &'a H) -> Self {
        Self {
            source,
            host,
            debug: false,
        }
    }

    /// Enable debug logging for streams started by this executor.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Start one stat stream.
    ///
    /// `force` selects the acquisition mode: `true` computes sizes for
    /// every known table, `false` only for tables touched since the last
    /// refresh. The role gate runs before any snapshot is allocated.
    pub fn execute(&self, force: bool) -> Result<StatStream, StreamError> {
        let role = self.host.execution_role();
        if let Err(err) = guard::check_stream_access(role) {
            obs::metrics::record_permission_denied();
            return Err(err.into());
        }

        let mode = AcquisitionMode::from_force(force);
        let snapshot = match acquire::acquire_snapshot(self.source, mode) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                obs::metrics::record_acquire_failure(mode);
                return Err(err.into());
            }
        };

        let stream = StatStream::new(snapshot, self.host.segment_id(), mode);
        obs::metrics::record_stream_started(mode);
        self.debug_log(format!(
            "Starting {mode} stat stream on segment {} ({} rows)",
            stream.segment_id(),
            stream.expected_rows()
        ));

        Ok(stream)
    }
}
