use chrono::{DateTime, Utc};

use crate::errors::KobeResult;
use crate::models::{TaskScoreUpdate, User};

/// Persistence collaborator for users and their tasks.
///
/// Every returned [`User`] carries its tasks in insertion order.
pub trait ITaskStore: Send + Sync {
    fn find_user_by_email(&self, email: &str) -> KobeResult<Option<User>>;

    /// Create a user with an empty task list, created at `now`.
    fn create_user(
        &self,
        email: &str,
        display_name: &str,
        photo_url: &str,
        now: DateTime<Utc>,
    ) -> KobeResult<User>;

    /// Append a fresh zero-score task. Fails with `UserNotFound` for an unknown email.
    fn append_task(&self, email: &str, name: &str, now: DateTime<Utc>) -> KobeResult<User>;

    /// Write a new score and last-update timestamp onto exactly one task.
    ///
    /// Fails with `UserNotFound`/`TaskNotFound` when the target is absent and
    /// with `ConcurrentUpdate` when the stored timestamp no longer matches
    /// `update.expected_last_updated`. Nothing is written on failure.
    fn set_task_score(&self, email: &str, update: &TaskScoreUpdate) -> KobeResult<User>;

    /// All users, oldest first.
    fn list_all_users(&self) -> KobeResult<Vec<User>>;
}
