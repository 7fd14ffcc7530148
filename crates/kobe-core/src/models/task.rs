use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{KobeError, KobeResult};

/// A trackable unit of user activity with an accruing score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// UUID v4 identifier, never reused.
    pub id: String,
    pub name: String,
    /// Immutable creation instant.
    pub date_created: DateTime<Utc>,
    /// Absent until the first successful score update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Stored score. Only the score-update rule changes it.
    pub score: i64,
}

impl Task {
    /// A fresh, never-scored task created at `now`.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            date_created: now,
            last_updated: None,
            score: 0,
        }
    }

    /// Check the stored invariants: non-negative score, and a last update
    /// that is not earlier than creation.
    pub fn validate(&self) -> KobeResult<()> {
        if self.score < 0 {
            return Err(KobeError::invalid_state(
                &self.id,
                format!("negative stored score {}", self.score),
            ));
        }
        if let Some(last_updated) = self.last_updated {
            if last_updated < self.date_created {
                return Err(KobeError::invalid_state(
                    &self.id,
                    format!(
                        "last update {} precedes creation {}",
                        last_updated.to_rfc3339(),
                        self.date_created.to_rfc3339()
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// A conditional score write for one task.
///
/// The write only lands if the stored `last_updated` still equals
/// `expected_last_updated`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskScoreUpdate {
    pub task_id: String,
    pub expected_last_updated: Option<DateTime<Utc>>,
    pub new_score: i64,
    pub new_last_updated: DateTime<Utc>,
}
