use serde::{Deserialize, Serialize};

use super::defaults;

/// Point values awarded by the score-update rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for a routine daily touch. Also the per-day ceiling used to
    /// decide whether a task is caught up.
    pub daily_points: i64,
    /// Points for a first touch on a later day than creation.
    pub late_first_touch_points: i64,
    /// Points when the task is exactly one point behind the ceiling.
    pub near_miss_points: i64,
    /// Points when the task fell further behind.
    pub catch_up_points: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            daily_points: defaults::DEFAULT_DAILY_POINTS,
            late_first_touch_points: defaults::DEFAULT_LATE_FIRST_TOUCH_POINTS,
            near_miss_points: defaults::DEFAULT_NEAR_MISS_POINTS,
            catch_up_points: defaults::DEFAULT_CATCH_UP_POINTS,
        }
    }
}
