use chrono::{DateTime, Utc};

use kobe_core::config::ScoringConfig;
use kobe_core::errors::{KobeError, KobeResult};
use kobe_core::models::{Task, TaskScoreUpdate, User};
use kobe_core::time::days_between;

/// Which branch of the update rule decided the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    /// First touch on the creation day.
    FirstTouchSameDay,
    /// First touch on a later day.
    FirstTouchLate,
    /// Already touched today. Nothing changes.
    AlreadyUpdatedToday,
    /// Score equals the ceiling of `daily_points` per elapsed day.
    CaughtUp,
    /// Exactly one point below the ceiling.
    NearMiss,
    /// Any other gap.
    CatchUp,
}

impl ScoreRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTouchSameDay => "first_touch_same_day",
            Self::FirstTouchLate => "first_touch_late",
            Self::AlreadyUpdatedToday => "already_updated_today",
            Self::CaughtUp => "caught_up",
            Self::NearMiss => "near_miss",
            Self::CatchUp => "catch_up",
        }
    }
}

/// Outcome of applying the update rule to one task.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreUpdate {
    pub task_id: String,
    pub previous_score: i64,
    pub previous_last_updated: Option<DateTime<Utc>>,
    /// Equal to `previous_score` when not applied.
    pub new_score: i64,
    /// Equal to the stored timestamp when not applied.
    pub new_last_updated: DateTime<Utc>,
    pub applied: bool,
    pub rule: ScoreRule,
}

impl ScoreUpdate {
    /// The conditional store write for an applied update, `None` for a no-op.
    pub fn to_store_update(&self) -> Option<TaskScoreUpdate> {
        self.applied.then(|| TaskScoreUpdate {
            task_id: self.task_id.clone(),
            expected_last_updated: self.previous_last_updated,
            new_score: self.new_score,
            new_last_updated: self.new_last_updated,
        })
    }
}

/// Write-side score rule: rewards consecutive-day activity and gives a
/// larger bonus when a task fell behind.
#[derive(Debug, Clone, Default)]
pub struct ScoreUpdateEngine {
    config: ScoringConfig,
}

impl ScoreUpdateEngine {
    /// Engine with the canonical point values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Decide the next stored score for `task` at `now`.
    ///
    /// A first touch sets the score outright; later touches add to it.
    ///
    /// Fails with `InvalidState` if the task breaks its invariants or `now`
    /// precedes its stored timestamps.
    pub fn update_task(&self, task: &Task, now: DateTime<Utc>) -> KobeResult<ScoreUpdate> {
        task.validate()?;
        if now < task.date_created {
            return Err(KobeError::invalid_state(
                &task.id,
                "current time precedes task creation",
            ));
        }

        let (new_score, new_last_updated, rule) = match task.last_updated {
            None => {
                let (points, rule) = if days_between(now, task.date_created) == 0 {
                    (self.config.daily_points, ScoreRule::FirstTouchSameDay)
                } else {
                    (self.config.late_first_touch_points, ScoreRule::FirstTouchLate)
                };
                (points, now, rule)
            }
            Some(last_updated) if now < last_updated => {
                return Err(KobeError::invalid_state(
                    &task.id,
                    "current time precedes last update",
                ));
            }
            Some(last_updated) if days_between(now, last_updated) == 0 => {
                (task.score, last_updated, ScoreRule::AlreadyUpdatedToday)
            }
            Some(_) => {
                let (points, rule) = self.gap_points(task, now);
                (task.score.saturating_add(points), now, rule)
            }
        };

        tracing::debug!(
            task_id = %task.id,
            rule = rule.as_str(),
            previous_score = task.score,
            new_score,
            "score rule evaluated"
        );

        Ok(ScoreUpdate {
            task_id: task.id.clone(),
            previous_score: task.score,
            previous_last_updated: task.last_updated,
            new_score,
            new_last_updated,
            applied: rule != ScoreRule::AlreadyUpdatedToday,
            rule,
        })
    }

    /// Look up `task_id` in `user` and apply [`Self::update_task`].
    pub fn update_user_task(
        &self,
        user: &User,
        task_id: &str,
        now: DateTime<Utc>,
    ) -> KobeResult<ScoreUpdate> {
        let task = user.find_task(task_id).ok_or_else(|| KobeError::TaskNotFound {
            email: user.email.clone(),
            task_id: task_id.to_string(),
        })?;
        self.update_task(task, now)
    }

    /// Points for a touch after a gap of at least one day.
    fn gap_points(&self, task: &Task, now: DateTime<Utc>) -> (i64, ScoreRule) {
        let max_prev_score =
            days_between(now, task.date_created).saturating_mul(self.config.daily_points);
        if max_prev_score == task.score {
            (self.config.daily_points, ScoreRule::CaughtUp)
        } else if max_prev_score - task.score == 1 {
            (self.config.near_miss_points, ScoreRule::NearMiss)
        } else {
            (self.config.catch_up_points, ScoreRule::CatchUp)
        }
    }
}
