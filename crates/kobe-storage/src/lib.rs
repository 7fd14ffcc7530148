//! # kobe-storage
//!
//! SQLite persistence for users and their tasks.
//! One serialized write connection, a read pool for file-backed databases,
//! versioned migrations, and compare-and-set score writes.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use kobe_core::errors::{KobeError, StorageError};

/// Wrap a SQLite failure message as a [`KobeError`].
pub(crate) fn to_storage_err(message: String) -> KobeError {
    KobeError::StorageError(StorageError::SqliteError { message })
}
