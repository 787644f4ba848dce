use crate::{
    snapshot::SizeSnapshot,
    source::{SourceError, TableSizeSource},
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// AcquisitionMode
/// Which size computation backs a stream's snapshot.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AcquisitionMode {
    /// Sizes for every known table.
    Full,
    /// Sizes only for tables touched since the last refresh.
    ActiveOnly,
}

impl AcquisitionMode {
    /// Map the invocation-level `force` flag onto an acquisition mode.
    #[must_use]
    pub const fn from_force(force: bool) -> Self {
        if force { Self::Full } else { Self::ActiveOnly }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ActiveOnly => "active_only",
        }
    }
}

impl fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// AcquireError
///
/// Fatal snapshot-acquisition failure. No partial snapshot is retained and
/// no cursor is created; a retry is a fresh stream attempt.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AcquireError {
    #[error("failed to acquire {mode} size snapshot: {source}")]
    SourceFailed {
        mode: AcquisitionMode,
        #[source]
        source: SourceError,
    },
}

impl AcquireError {
    /// Acquisition mode the failed attempt was started with.
    #[must_use]
    pub const fn mode(&self) -> AcquisitionMode {
        match self {
            Self::SourceFailed { mode, .. } => *mode,
        }
    }
}

/// Obtain a freshly computed snapshot for the selected mode.
///
/// Pure mode-selected pass-through: ownership of the returned map moves to
/// the caller with its entries untouched.
pub(crate) fn acquire_snapshot<S: TableSizeSource>(
    source: &S,
    mode: AcquisitionMode,
) -> Result<SizeSnapshot, AcquireError> {
    let computed = match mode {
        AcquisitionMode::Full => source.compute_full_sizes(),
        AcquisitionMode::ActiveOnly => source.compute_active_sizes(),
    };

    computed.map_err(|source| AcquireError::SourceFailed { mode, source })
}

///
/// TESTS
///
