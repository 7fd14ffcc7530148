//! # kobe-scoring
//!
//! The decision logic of Kobe, as three independent engines over data
//! already fetched from the store:
//! - [`ScoreUpdateEngine`]: the once-per-day write-side score rule.
//! - [`ScoreReadEngine`]: the age-normalized display score.
//! - [`LeaderboardEngine`]: per-user aggregates, ordering, and positions.

pub mod leaderboard;
pub mod render;
pub mod update;

pub use leaderboard::{KobeScoreBreakdown, LeaderboardEngine};
pub use render::ScoreReadEngine;
pub use update::{ScoreRule, ScoreUpdate, ScoreUpdateEngine};
