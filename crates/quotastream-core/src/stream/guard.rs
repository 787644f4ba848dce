use crate::types::ExecutionRole;
use thiserror::Error as ThisError;

///
/// PermissionError
///
/// Raised before any snapshot is allocated when the caller's execution
/// role may not start a stat stream. Never retried; resumptions of an
/// already-started stream are not re-checked.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum PermissionError {
    #[error("table size statistics must be streamed from the coordinator; called as {role}")]
    RoleNotPermitted { role: ExecutionRole },
}

/// Gate stream start on the caller's execution role.
///
/// Size data is only meaningful at the coordinating node; worker and
/// utility contexts fail here, before acquisition runs.
pub(crate) const fn check_stream_access(role: ExecutionRole) -> Result<(), PermissionError> {
    match role {
        ExecutionRole::Coordinator => Ok(()),
        ExecutionRole::WorkerExecution | ExecutionRole::Utility => {
            Err(PermissionError::RoleNotPermitted { role })
        }
    }
}

///
/// TESTS
///
