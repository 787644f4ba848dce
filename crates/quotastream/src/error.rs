use quotastream_core::stream::{AcquireError, PermissionError, ProtocolError, StreamError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<PermissionError> for Error {
    fn from(err: PermissionError) -> Self {
        Self::new(ErrorKind::Permission, ErrorOrigin::Guard, err.to_string())
    }
}

impl From<AcquireError> for Error {
    fn from(err: AcquireError) -> Self {
        Self::new(ErrorKind::Acquisition, ErrorOrigin::Acquire, err.to_string())
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Self::new(ErrorKind::Protocol, ErrorOrigin::Stream, err.to_string())
    }
}

impl From<StreamError> for Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::PermissionError(err) => err.into(),
            StreamError::AcquireError(err) => err.into(),
            StreamError::ProtocolError(err) => err.into(),
        }
    }
}

///
/// ErrorKind
/// Public error taxonomy for host classification.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Permission,
    Acquisition,
    Protocol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Permission => "permission",
            Self::Acquisition => "acquisition",
            Self::Protocol => "protocol",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Subsystem stage the error was raised from.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Guard,
    Acquire,
    Stream,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Guard => "guard",
            Self::Acquire => "acquire",
            Self::Stream => "stream",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
