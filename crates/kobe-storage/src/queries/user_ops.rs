//! Insert and load users together with their tasks.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};

use kobe_core::errors::{KobeResult, StorageError};
use kobe_core::models::{Task, User};

use super::task_ops;
use super::{fmt_ts, parse_ts};
use crate::to_storage_err;

struct UserRow {
    email: String,
    id: String,
    display_name: String,
    photo_url: String,
    date_created: String,
}

impl UserRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            email: row.get(0)?,
            id: row.get(1)?,
            display_name: row.get(2)?,
            photo_url: row.get(3)?,
            date_created: row.get(4)?,
        })
    }

    fn into_user(self, tasks: Vec<Task>) -> KobeResult<User> {
        let date_created = parse_ts(&self.date_created).ok_or_else(|| {
            StorageError::CorruptionDetected {
                details: format!(
                    "user {} has malformed date_created {:?}",
                    self.email, self.date_created
                ),
            }
        })?;
        Ok(User {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            photo_url: self.photo_url,
            date_created,
            tasks,
        })
    }
}

/// Insert `user` unless the email is already registered.
/// Returns whether a row was inserted. Tasks on `user` are ignored.
pub fn insert_user_if_absent(conn: &Connection, user: &User) -> KobeResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO users (email, id, display_name, photo_url, date_created)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.email,
                user.id,
                user.display_name,
                user.photo_url,
                fmt_ts(user.date_created),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(inserted > 0)
}

pub fn user_exists(conn: &Connection, email: &str) -> KobeResult<bool> {
    conn.query_row(
        "SELECT 1 FROM users WHERE email = ?1",
        params![email],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Load one user with its tasks in insertion order.
pub fn get_user(conn: &Connection, email: &str) -> KobeResult<Option<User>> {
    let row = conn
        .query_row(
            "SELECT email, id, display_name, photo_url, date_created
             FROM users WHERE email = ?1",
            params![email],
            UserRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some(row) => {
            let tasks = task_ops::tasks_for_user(conn, email)?;
            Ok(Some(row.into_user(tasks)?))
        }
        None => Ok(None),
    }
}

/// Load every user, oldest first, each with its tasks in insertion order.
pub fn list_users(conn: &Connection) -> KobeResult<Vec<User>> {
    let mut stmt = conn
        .prepare(
            "SELECT email, id, display_name, photo_url, date_created
             FROM users ORDER BY date_created, rowid",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], UserRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut tasks_by_user: HashMap<String, Vec<Task>> = HashMap::new();
    for (email, task) in task_ops::all_tasks(conn)? {
        tasks_by_user.entry(email).or_default().push(task);
    }

    rows.into_iter()
        .map(|row| {
            let tasks = tasks_by_user.remove(&row.email).unwrap_or_default();
            row.into_user(tasks)
        })
        .collect()
}
