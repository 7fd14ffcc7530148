use super::{ConfigError, StorageError};

/// Top-level error for every Kobe operation.
#[derive(Debug, thiserror::Error)]
pub enum KobeError {
    #[error("user not found: {email}")]
    UserNotFound { email: String },

    #[error("task {task_id} not found for user {email}")]
    TaskNotFound { email: String, task_id: String },

    /// Stored data violates a model invariant. Rejected, never repaired.
    #[error("invalid state for task {task_id}: {reason}")]
    InvalidState { task_id: String, reason: String },

    /// The task changed between read and write; nothing was written.
    #[error("task {task_id} was updated concurrently")]
    ConcurrentUpdate { task_id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl KobeError {
    /// Shorthand for an [`KobeError::InvalidState`] on a task.
    pub fn invalid_state(task_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            task_id: task_id.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means a referenced user or task does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. } | Self::TaskNotFound { .. })
    }
}

pub type KobeResult<T> = Result<T, KobeError>;
