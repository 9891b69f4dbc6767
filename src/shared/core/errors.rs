use thiserror::Error;

/// Error returned by every service operation.
///
/// Variants map one to one onto the response classes of the inbound layer:
/// malformed input, missing record, caller expectation mismatch, failed
/// ownership check, and collaborator failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for ApplicationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApplicationError::BadRequest(errors.to_string())
    }
}
