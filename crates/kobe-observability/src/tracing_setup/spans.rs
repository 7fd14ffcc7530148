//! Span definitions per operation: score update, score render, leaderboard.

/// Create a score-update span.
#[macro_export]
macro_rules! update_span {
    ($email:expr, $task_id:expr) => {
        tracing::info_span!("kobe.update", email = %$email, task_id = %$task_id)
    };
}

/// Create a render span.
#[macro_export]
macro_rules! render_span {
    ($email:expr) => {
        tracing::info_span!("kobe.render", email = %$email)
    };
}

/// Create a leaderboard span.
#[macro_export]
macro_rules! leaderboard_span {
    ($user_count:expr) => {
        tracing::info_span!("kobe.leaderboard", user_count = $user_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const UPDATE: &str = "kobe.update";
    pub const RENDER: &str = "kobe.render";
    pub const LEADERBOARD: &str = "kobe.leaderboard";
}
