//! Single write connection behind a mutex.
//! All writes are serialized through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use kobe_core::errors::KobeResult;

use super::pragmas::{apply_default_pragmas, apply_pragmas};
use crate::to_storage_err;

/// A single write connection protected by a mutex.
///
/// Callers block while another write holds the lock. Safe to call from any
/// thread, including async runtime workers.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> KobeResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> KobeResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_default_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> KobeResult<T>
    where
        F: FnOnce(&Connection) -> KobeResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
