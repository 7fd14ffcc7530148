//! Error handling for Kobe.
//! One error enum per concern, `thiserror` only, aggregated into [`KobeError`].

pub mod config_error;
pub mod kobe_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use kobe_error::{KobeError, KobeResult};
pub use storage_error::StorageError;
