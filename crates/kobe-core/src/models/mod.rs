//! Persisted records (users, tasks) and their read-time projections.

pub mod display;
pub mod leaderboard;
pub mod task;
pub mod user;

pub use display::{DisplayTask, DisplayUser};
pub use leaderboard::LeaderboardEntry;
pub use task::{Task, TaskScoreUpdate};
pub use user::User;
