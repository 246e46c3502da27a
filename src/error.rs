// src/error.rs
// Error taxonomy for the reminders bridge

use thiserror::Error;

/// Main error type for the reminders library
#[derive(Error, Debug)]
pub enum RemindersError {
    /// The interpreter could not be spawned or exited non-zero.
    #[error("interpreter failed: {diagnostic}")]
    Invocation { diagnostic: String },

    /// The interpreter failed because the referenced object does not exist.
    /// Only ever derived from the host's own error report, never from a pre-check.
    #[error("not found: {diagnostic}")]
    NotFound { diagnostic: String },

    /// The interpreter succeeded but its output could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using RemindersError
pub type Result<T> = std::result::Result<T, RemindersError>;

impl RemindersError {
    pub fn invocation(diagnostic: impl Into<String>) -> Self {
        RemindersError::Invocation {
            diagnostic: diagnostic.into(),
        }
    }

    /// True when the host refused the command (including a missing target).
    pub fn is_invocation(&self) -> bool {
        matches!(
            self,
            RemindersError::Invocation { .. } | RemindersError::NotFound { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RemindersError::NotFound { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, RemindersError::Decode(_))
    }

    /// Convert to user-facing string for MCP tool boundaries
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }
}

impl From<RemindersError> for String {
    fn from(err: RemindersError) -> Self {
        err.to_string()
    }
}
