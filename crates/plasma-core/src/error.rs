//! Shared error type across Plasma crates.

use thiserror::Error;

use crate::messages::Operation;

/// Wire-level fault codes (stable API).
///
/// These are the values placed in `ErrorMessage.faultCode` when a failure
/// is reported back to a remote peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// The message cannot be responded to in its current state.
    InvalidOperation,
    /// Recognized operation with no business logic bound to it.
    NotImplemented,
    /// Malformed message or argument.
    BadRequest,
    /// Destination is not served by this endpoint.
    ResourceUnavailable,
    /// Unsupported configuration/protocol version.
    UnsupportedVersion,
    /// Anything else raised while processing.
    Processing,
}

impl FaultCode {
    /// String representation used in `ErrorMessage.faultCode`.
    pub fn as_str(self) -> &'static str {
        match self {
            FaultCode::InvalidOperation => "Client.Message.InvalidOperation",
            FaultCode::NotImplemented => "Server.Processing.NotImplemented",
            FaultCode::BadRequest => "Client.Message.BadRequest",
            FaultCode::ResourceUnavailable => "Server.ResourceUnavailable",
            FaultCode::UnsupportedVersion => "Client.Message.UnsupportedVersion",
            FaultCode::Processing => "Server.Processing",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PlasmaError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum PlasmaError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("operation not implemented: {0}")]
    OperationNotImplemented(Operation),
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("capability unavailable: {0} has no compact form")]
    CapabilityUnavailable(&'static str),
    #[error("unknown destination: {0}")]
    UnknownDestination(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PlasmaError {
    /// Map internal error to a stable wire-level fault code.
    pub fn fault_code(&self) -> FaultCode {
        match self {
            PlasmaError::InvalidOperation(_) => FaultCode::InvalidOperation,
            PlasmaError::OperationNotImplemented(_) => FaultCode::NotImplemented,
            PlasmaError::IndexOutOfRange { .. } | PlasmaError::TypeMismatch(_) => {
                FaultCode::BadRequest
            }
            PlasmaError::BadRequest(_) => FaultCode::BadRequest,
            PlasmaError::UnknownDestination(_) => FaultCode::ResourceUnavailable,
            PlasmaError::UnsupportedVersion => FaultCode::UnsupportedVersion,
            PlasmaError::CapabilityUnavailable(_)
            | PlasmaError::Config(_)
            | PlasmaError::Internal(_) => FaultCode::Processing,
        }
    }
}
