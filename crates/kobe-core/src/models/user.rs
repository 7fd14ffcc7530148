use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::task::Task;

/// A leaderboard participant, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque store-assigned id.
    pub id: String,
    /// Unique, immutable identity.
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub date_created: DateTime<Utc>,
    /// Insertion order is canonical.
    pub tasks: Vec<Task>,
}

impl User {
    /// A new user with no tasks.
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        photo_url: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            display_name: display_name.into(),
            photo_url: photo_url.into(),
            date_created: now,
            tasks: Vec::new(),
        }
    }

    /// Display name up to its first space. Only `' '` separates words, so a
    /// leading space yields an empty name.
    pub fn first_name(&self) -> &str {
        self.display_name.split(' ').next().unwrap_or("")
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}
