//! Error types for list loading.

use thiserror::Error;

/// Result type for list loading operations.
pub type ListsResult<T> = Result<T, ListsError>;

/// Errors that can occur while loading selectable lists.
#[derive(Debug, Error)]
pub enum ListsError {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("network error: {0}")]
    Network(String),

    /// The listing service answered with a non-success status.
    #[error("listing service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected `value[].{Id,Title}` shape.
    #[error("malformed listing response: {0}")]
    MalformedResponse(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ListsError {
    /// Returns true for transport failures (no response, or a non-success status).
    pub fn is_transport(&self) -> bool {
        matches!(self, ListsError::Network(_) | ListsError::Status { .. })
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ListsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
