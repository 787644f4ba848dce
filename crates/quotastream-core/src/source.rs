use crate::{
    snapshot::SizeSnapshot,
    types::{ExecutionRole, SegmentId},
};
use thiserror::Error as ThisError;

///
/// SourceError
/// Failure reported by a size-computation collaborator.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("size source failed: {message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// TableSizeSource
///
/// The size-computation engine consumed by snapshot acquisition.
///
/// Both computations return a newly allocated snapshot; ownership
/// transfers wholesale to the caller. Acquisition performs no filtering
/// or transformation of the returned entries.
///

pub trait TableSizeSource {
    /// Compute sizes for every known table.
    fn compute_full_sizes(&self) -> Result<SizeSnapshot, SourceError>;

    /// Compute sizes only for tables touched since the last refresh.
    fn compute_active_sizes(&self) -> Result<SizeSnapshot, SourceError>;
}

///
/// HostEnv
///
/// Host-supplied identity: the caller's execution role and this node's
/// segment identity. Injected at stream start so the stream never reads
/// process-wide globals.
///

pub trait HostEnv {
    /// Execution role of the caller attempting to start a stream.
    fn execution_role(&self) -> ExecutionRole;

    /// Identity of the reporting node, attached to every emitted row.
    fn segment_id(&self) -> SegmentId;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_message_is_user_facing() {
        let err = SourceError::new("refresh map unavailable");

        assert_eq!(err.to_string(), "size source failed: refresh map unavailable");
    }
}
