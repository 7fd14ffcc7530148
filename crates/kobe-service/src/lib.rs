//! # kobe-service
//!
//! The operations callers use: fetch-or-create a user, add a task, record a
//! task touch, and compute the leaderboard. Threads an explicit task store and
//! clock through the scoring engines.

pub mod outcome;
pub mod service;

pub use outcome::TaskUpdateOutcome;
pub use service::KobeService;
