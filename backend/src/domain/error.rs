//! Domain-level error taxonomy for employee requests.
//!
//! These errors are transport agnostic. The handler set folds them into an
//! [`Envelope`](crate::domain::Envelope) carrying the numeric status that
//! inbound adapters echo on the wire.

use crate::domain::EmployeeValidationError;
use crate::domain::envelope::status;
use crate::domain::ports::EmployeeRepositoryError;

/// Stable category describing who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request body is malformed or fails validation.
    InvalidRequest,
    /// The store failed while serving an otherwise valid request.
    InternalError,
}

impl ErrorCode {
    /// Numeric status reported for this category.
    pub fn status(self) -> u16 {
        match self {
            Self::InvalidRequest => status::BAD_REQUEST,
            Self::InternalError => status::INTERNAL_SERVER_ERROR,
        }
    }

}

/// Employee operation a request belongs to.
///
/// Store failures are summarised per operation: create and get-one report
/// `Internal Server Error`, the others plain `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeOperation {
    Create,
    ListAll,
    GetOne,
    Update,
    Delete,
}

impl EmployeeOperation {
    /// Short name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::ListAll => "list",
            Self::GetOne => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Terminal failure of a single employee request.
///
/// # Examples
/// ```
/// use employees::domain::{ErrorCode, RequestError};
///
/// let err = RequestError::malformed_request("expected value at line 1 column 1");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The body could not be parsed as an employee payload.
    #[error("malformed request body: {message}")]
    MalformedRequest { message: String },
    /// A required field was missing or zero.
    #[error(transparent)]
    Validation(#[from] EmployeeValidationError),
    /// The store failed, timed out, or found nothing to read.
    #[error(transparent)]
    Store(#[from] EmployeeRepositoryError),
}

impl RequestError {
    /// Convenience constructor for [`RequestError::MalformedRequest`].
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedRequest { .. } | Self::Validation(_) => ErrorCode::InvalidRequest,
            Self::Store(_) => ErrorCode::InternalError,
        }
    }

    /// Summary message placed in the failure envelope of `operation`.
    pub fn summary(&self, operation: EmployeeOperation) -> &'static str {
        match (self.code(), operation) {
            (ErrorCode::InternalError, EmployeeOperation::Create | EmployeeOperation::GetOne) => {
                "Internal Server Error"
            }
            _ => "Error",
        }
    }
}
