//! StorageEngine: owns the ConnectionPool, runs migrations at startup, and
//! implements ITaskStore.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use kobe_core::config::StorageConfig;
use kobe_core::errors::{KobeError, KobeResult};
use kobe_core::models::{Task, TaskScoreUpdate, User};
use kobe_core::traits::ITaskStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{task_ops, user_ops};
use crate::to_storage_err;

/// The SQLite task store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> KobeResult<Self> {
        Self::open_with_config(&StorageConfig {
            db_path: path.display().to_string(),
            ..StorageConfig::default()
        })
    }

    /// Open the database named by `config.db_path`.
    pub fn open_with_config(config: &StorageConfig) -> KobeResult<Self> {
        let pool = ConnectionPool::open(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::info!(db_path = %config.db_path, "task store opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> KobeResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> KobeResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on a pooled reader, or on the writer in
    /// memory mode.
    fn with_reader<F, T>(&self, f: F) -> KobeResult<T>
    where
        F: FnOnce(&Connection) -> KobeResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    /// Run `f` in a write transaction: committed on `Ok`, rolled back on `Err`.
    fn with_write_tx<F, T>(&self, label: &str, f: F) -> KobeResult<T>
    where
        F: FnOnce(&Connection) -> KobeResult<T>,
    {
        self.pool.writer.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("{label} begin: {e}")))?;
            match f(&*tx) {
                Ok(value) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("{label} commit: {e}")))?;
                    Ok(value)
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })
    }
}

/// Re-read a user inside a write transaction; absence means the user vanished.
fn reload_user(conn: &Connection, email: &str) -> KobeResult<User> {
    user_ops::get_user(conn, email)?.ok_or_else(|| KobeError::UserNotFound {
        email: email.to_string(),
    })
}

impl ITaskStore for StorageEngine {
    fn find_user_by_email(&self, email: &str) -> KobeResult<Option<User>> {
        self.with_reader(|conn| user_ops::get_user(conn, email))
    }

    /// Returns the existing user unchanged if the email is already registered.
    fn create_user(
        &self,
        email: &str,
        display_name: &str,
        photo_url: &str,
        now: DateTime<Utc>,
    ) -> KobeResult<User> {
        let user = User::new(email, display_name, photo_url, now);
        self.with_write_tx("create_user", |conn| {
            if !user_ops::insert_user_if_absent(conn, &user)? {
                tracing::debug!(email, "user already registered");
            }
            reload_user(conn, email)
        })
    }

    fn append_task(&self, email: &str, name: &str, now: DateTime<Utc>) -> KobeResult<User> {
        let task = Task::new(name, now);
        self.with_write_tx("append_task", |conn| {
            if !user_ops::user_exists(conn, email)? {
                return Err(KobeError::UserNotFound {
                    email: email.to_string(),
                });
            }
            task_ops::insert_task(conn, email, &task)?;
            reload_user(conn, email)
        })
    }

    fn set_task_score(&self, email: &str, update: &TaskScoreUpdate) -> KobeResult<User> {
        self.with_write_tx("set_task_score", |conn| {
            task_ops::set_task_score(conn, email, update)?;
            reload_user(conn, email)
        })
    }

    fn list_all_users(&self) -> KobeResult<Vec<User>> {
        self.with_reader(user_ops::list_users)
    }
}
