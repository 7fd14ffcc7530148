//! SQL for users and tasks. Every function takes a plain connection so the
//! engine decides which pool connection or transaction it runs on.

pub mod task_ops;
pub mod user_ops;

use chrono::{DateTime, SecondsFormat, Utc};

/// Canonical stored form of a timestamp. Fixed width, so equal instants
/// always produce equal strings.
pub fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp.
pub fn parse_ts(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
