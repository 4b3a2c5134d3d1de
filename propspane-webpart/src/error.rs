//! Error types for the web part and its host adapter.

use crate::lifecycle::LifecycleState;
use crate::version::Version;
use propspane_lists::ListsError;
use thiserror::Error;

/// Result type for web part operations.
pub type WebPartResult<T> = Result<T, WebPartError>;

#[derive(Debug, Error)]
pub enum WebPartError {
    /// Loading the web part's data failed; the web part is not renderable.
    #[error("initialization failed: {0}")]
    Initialization(#[from] ListsError),

    #[error("web part is not ready (state: {0})")]
    NotReady(LifecycleState),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property '{0}' is not editable from the property pane")]
    ReadOnlyProperty(String),

    #[error("invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },

    #[error("'{value}' is not one of the loaded lists")]
    ListNotLoaded { value: String },

    #[error("'{property}' must be within [{min}, {max}], got {value}")]
    OutOfRange {
        property: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unsupported data version {found} (supported: {supported})")]
    UnsupportedDataVersion { found: Version, supported: Version },

    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebPartError {
    /// Returns true if the error came from a rejected property value
    /// rather than from the web part's lifecycle.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WebPartError::UnknownProperty(_)
                | WebPartError::ReadOnlyProperty(_)
                | WebPartError::InvalidValue { .. }
                | WebPartError::ListNotLoaded { .. }
                | WebPartError::OutOfRange { .. }
        )
    }
}
