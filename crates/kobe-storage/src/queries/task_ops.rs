//! Append, load, and conditionally rescore tasks.

use rusqlite::{params, Connection, OptionalExtension};

use kobe_core::errors::{KobeError, KobeResult};
use kobe_core::models::{Task, TaskScoreUpdate};

use super::{fmt_ts, parse_ts};
use crate::to_storage_err;

const TASK_COLUMNS: &str = "id, name, date_created, last_updated, score";

struct TaskRow {
    id: String,
    name: String,
    date_created: String,
    last_updated: Option<String>,
    score: i64,
}

impl TaskRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            date_created: row.get(2)?,
            last_updated: row.get(3)?,
            score: row.get(4)?,
        })
    }

    /// Convert to a validated [`Task`]. Malformed rows are `InvalidState`.
    fn into_task(self) -> KobeResult<Task> {
        let date_created = parse_ts(&self.date_created).ok_or_else(|| {
            KobeError::invalid_state(
                &self.id,
                format!("malformed date_created {:?}", self.date_created),
            )
        })?;
        let last_updated = match self.last_updated {
            Some(raw) => Some(parse_ts(&raw).ok_or_else(|| {
                KobeError::invalid_state(&self.id, format!("malformed last_updated {raw:?}"))
            })?),
            None => None,
        };
        let task = Task {
            id: self.id,
            name: self.name,
            date_created,
            last_updated,
            score: self.score,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Append `task` after the user's existing tasks.
pub fn insert_task(conn: &Connection, email: &str, task: &Task) -> KobeResult<()> {
    conn.execute(
        "INSERT INTO tasks (id, user_email, seq, name, date_created, last_updated, score)
         VALUES (
            ?1, ?2,
            (SELECT COALESCE(MAX(seq), 0) + 1 FROM tasks WHERE user_email = ?2),
            ?3, ?4, ?5, ?6
         )",
        params![
            task.id,
            email,
            task.name,
            fmt_ts(task.date_created),
            task.last_updated.map(fmt_ts),
            task.score,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// One user's tasks in insertion order.
pub fn tasks_for_user(conn: &Connection, email: &str) -> KobeResult<Vec<Task>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_email = ?1 ORDER BY seq"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![email], TaskRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut tasks = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        tasks.push(row.into_task()?);
    }
    Ok(tasks)
}

/// Every task paired with its owner's email, in per-user insertion order.
pub fn all_tasks(conn: &Connection) -> KobeResult<Vec<(String, Task)>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {TASK_COLUMNS}, user_email FROM tasks ORDER BY user_email, seq"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let email: String = row.get(5)?;
            Ok((email, TaskRow::from_row(row)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut tasks = Vec::new();
    for row in rows {
        let (email, row) = row.map_err(|e| to_storage_err(e.to_string()))?;
        tasks.push((email, row.into_task()?));
    }
    Ok(tasks)
}

/// Write score and timestamp onto one task if its stored `last_updated`
/// still equals `update.expected_last_updated`.
///
/// On zero affected rows the cause is diagnosed as a missing user, a
/// missing task, or a lost race.
pub fn set_task_score(conn: &Connection, email: &str, update: &TaskScoreUpdate) -> KobeResult<()> {
    let changed = conn
        .execute(
            "UPDATE tasks SET score = ?1, last_updated = ?2
             WHERE id = ?3 AND user_email = ?4 AND last_updated IS ?5",
            params![
                update.new_score,
                fmt_ts(update.new_last_updated),
                update.task_id,
                email,
                update.expected_last_updated.map(fmt_ts),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 1 {
        return Ok(());
    }

    if !super::user_ops::user_exists(conn, email)? {
        return Err(KobeError::UserNotFound {
            email: email.to_string(),
        });
    }
    let task_exists = conn
        .query_row(
            "SELECT 1 FROM tasks WHERE id = ?1 AND user_email = ?2",
            params![update.task_id, email],
            |_| Ok(()),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .is_some();
    if !task_exists {
        return Err(KobeError::TaskNotFound {
            email: email.to_string(),
            task_id: update.task_id.clone(),
        });
    }
    Err(KobeError::ConcurrentUpdate {
        task_id: update.task_id.clone(),
    })
}
