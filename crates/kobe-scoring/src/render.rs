use chrono::{DateTime, Utc};

use kobe_core::models::{DisplayTask, DisplayUser, Task, User};
use kobe_core::time::days_between;

/// Read-side projection: divides each stored score by the number of days
/// the task has existed, counting its creation day.
///
/// Pure. Never touches storage and never changes its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreReadEngine;

impl ScoreReadEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn render_task(&self, task: &Task, now: DateTime<Utc>) -> DisplayTask {
        let (score, updated_today) = if task.score == 0 {
            (0.0, false)
        } else {
            // A creation instant ahead of `now` reads as day 0.
            let days = days_between(now, task.date_created).max(0);
            (task.score as f64 / (days + 1) as f64, days == 0)
        };

        DisplayTask {
            id: task.id.clone(),
            name: task.name.clone(),
            date_created: task.date_created,
            last_updated: task.last_updated,
            score,
            updated_today,
        }
    }

    /// Render every task, preserving order.
    pub fn render_tasks(&self, tasks: &[Task], now: DateTime<Utc>) -> Vec<DisplayTask> {
        tasks.iter().map(|t| self.render_task(t, now)).collect()
    }

    pub fn render_user(&self, user: &User, now: DateTime<Utc>) -> DisplayUser {
        DisplayUser {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
            date_created: user.date_created,
            tasks: self.render_tasks(&user.tasks, now),
        }
    }
}
