use kobe_core::models::User;

/// Result of recording a touch on a task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskUpdateOutcome {
    /// The new score was stored; carries the refreshed user.
    Updated(User),
    /// The task was already touched today. Nothing was written.
    AlreadyUpdatedToday,
}

impl TaskUpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}
