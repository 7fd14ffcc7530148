//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use kobe_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use kobe_core::errors::KobeResult;

use crate::to_storage_err;

/// WAL, NORMAL sync, foreign keys, and the given busy timeout.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> KobeResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas for read-only connections.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> KobeResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA query_only = ON;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas with the default busy timeout.
pub fn apply_default_pragmas(conn: &Connection) -> KobeResult<()> {
    apply_pragmas(conn, DEFAULT_BUSY_TIMEOUT_MS)
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> KobeResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
