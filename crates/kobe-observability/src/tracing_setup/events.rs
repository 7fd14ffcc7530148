//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a user registration.
pub fn user_created(email: &str, user_id: &str) {
    tracing::info!(
        event = "user_created",
        email = %email,
        user_id = %user_id,
        "user created"
    );
}

/// Log a task being appended to a user's list.
pub fn task_created(email: &str, task_id: &str, task_count: usize) {
    tracing::info!(
        event = "task_created",
        email = %email,
        task_id = %task_id,
        task_count = task_count,
        "task created"
    );
}

/// Log a stored score change.
pub fn task_score_updated(task_id: &str, rule: &str, previous_score: i64, new_score: i64) {
    tracing::info!(
        event = "task_score_updated",
        task_id = %task_id,
        rule = %rule,
        previous_score = previous_score,
        new_score = new_score,
        "task score updated"
    );
}

/// Log an update request that changed nothing.
pub fn task_update_skipped(task_id: &str, reason: &str) {
    tracing::info!(
        event = "task_update_skipped",
        task_id = %task_id,
        reason = %reason,
        "task update skipped"
    );
}

/// Log a completed leaderboard computation.
pub fn leaderboard_computed(user_count: usize, top_score: Option<&str>) {
    tracing::info!(
        event = "leaderboard_computed",
        user_count = user_count,
        top_score = ?top_score,
        "leaderboard computed"
    );
}
