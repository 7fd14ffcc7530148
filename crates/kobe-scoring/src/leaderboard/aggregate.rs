use chrono::{DateTime, Utc};

use kobe_core::constants::{EMPTY_KOBE_SCORE, KOBE_SCORE_DECIMALS};
use kobe_core::models::User;
use kobe_core::time::days_between;

/// Inputs and result of one user's aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KobeScoreBreakdown {
    pub task_count: usize,
    /// Sum of stored task scores.
    pub total_score: i64,
    /// Sum over tasks of days since creation plus one.
    pub total_days: i64,
    pub kobe_score: String,
}

/// Formatted aggregate: `"0"` without tasks, otherwise
/// `total_score / total_days` to two decimal places.
pub fn kobe_score(user: &User, now: DateTime<Utc>) -> String {
    compute_breakdown(user, now).kobe_score
}

pub fn compute_breakdown(user: &User, now: DateTime<Utc>) -> KobeScoreBreakdown {
    if user.tasks.is_empty() {
        return KobeScoreBreakdown {
            task_count: 0,
            total_score: 0,
            total_days: 0,
            kobe_score: EMPTY_KOBE_SCORE.to_string(),
        };
    }

    let (total_score, total_days) =
        user.tasks
            .iter()
            .fold((0i64, 0i64), |(score, days), task| {
                // Every task counts at least its creation day.
                let age = days_between(now, task.date_created).max(0);
                (score.saturating_add(task.score), days.saturating_add(age + 1))
            });

    KobeScoreBreakdown {
        task_count: user.tasks.len(),
        total_score,
        total_days,
        kobe_score: format_ratio(total_score, total_days),
    }
}

/// `numerator / denominator` with [`KOBE_SCORE_DECIMALS`] places, rounding
/// the exact quotient half away from zero. `denominator` must be positive.
pub fn format_ratio(numerator: i64, denominator: i64) -> String {
    debug_assert!(denominator > 0);
    let scale = 10i128.pow(KOBE_SCORE_DECIMALS);
    let n = i128::from(numerator).abs() * scale;
    let d = i128::from(denominator);
    let scaled = (2 * n + d) / (2 * d);

    let sign = if numerator < 0 && scaled != 0 { "-" } else { "" };
    format!(
        "{sign}{}.{:0width$}",
        scaled / scale,
        scaled % scale,
        width = KOBE_SCORE_DECIMALS as usize
    )
}
