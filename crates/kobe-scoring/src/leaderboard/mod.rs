//! Leaderboard: one aggregate per user, a component-wise ordering of the
//! formatted aggregates, and carry-forward positions.

pub mod aggregate;
pub mod ordering;
pub mod positions;

use chrono::{DateTime, Utc};

use kobe_core::models::{LeaderboardEntry, User};

pub use aggregate::KobeScoreBreakdown;

/// Ranks users by their kobe score.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderboardEngine;

impl LeaderboardEngine {
    pub fn new() -> Self {
        Self
    }

    /// The formatted aggregate for one user.
    pub fn kobe_score(&self, user: &User, now: DateTime<Utc>) -> String {
        aggregate::kobe_score(user, now)
    }

    /// Aggregate with its inputs, for debugging and observability.
    pub fn breakdown(&self, user: &User, now: DateTime<Utc>) -> KobeScoreBreakdown {
        aggregate::compute_breakdown(user, now)
    }

    /// Score, sort, and position every user.
    ///
    /// The sort is stable, so users with equal scores keep their input order.
    pub fn rank(&self, users: &[User], now: DateTime<Utc>) -> Vec<LeaderboardEntry> {
        let mut scored: Vec<(&User, String)> = users
            .iter()
            .map(|user| (user, aggregate::kobe_score(user, now)))
            .collect();
        scored.sort_by(|(_, a), (_, b)| ordering::leaderboard_order(a, b));

        let positions = positions::assign_positions(scored.iter().map(|(_, s)| s.as_str()));
        tracing::debug!(users = users.len(), "leaderboard ranked");

        scored
            .into_iter()
            .zip(positions)
            .map(|((user, kobe_score), position)| LeaderboardEntry {
                name: user.first_name().to_string(),
                id: user.id.clone(),
                photo_url: user.photo_url.clone(),
                email: user.email.clone(),
                kobe_score,
                position,
            })
            .collect()
    }
}
