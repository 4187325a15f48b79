use math::error::{InterpolationError, RadixError};
use thiserror::Error;

/// Result type specialized for recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while loading an instance or recovering its secret.
///
/// Every variant is scoped to a single instance; the batch driver reports it
/// and moves on.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Invalid threshold: k must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("Insufficient points: need {needed}, got {found}")]
    InsufficientPoints { needed: usize, found: usize },
    #[error("Malformed instance: {0}")]
    MalformedInstance(String),
    #[error("Malformed value for x = {x}: {source}")]
    MalformedShare {
        x: i64,
        #[source]
        source: RadixError,
    },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecoveryError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RecoveryError::MalformedInstance(reason.into())
    }

    /// True when the instance itself could not be understood, as opposed to
    /// a well-formed instance whose points could not be fitted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RecoveryError::MalformedInstance(_)
                | RecoveryError::MalformedShare { .. }
                | RecoveryError::Json(_)
                | RecoveryError::Io(_)
        )
    }
}
