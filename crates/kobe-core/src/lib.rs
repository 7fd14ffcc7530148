//! # kobe-core
//!
//! Foundation crate for the Kobe scoring engine.
//! Defines the user/task model, traits, errors, config, and day arithmetic.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod time;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KobeConfig;
pub use errors::{KobeError, KobeResult};
pub use models::{DisplayTask, DisplayUser, LeaderboardEntry, Task, TaskScoreUpdate, User};
pub use time::days_between;
