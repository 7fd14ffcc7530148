// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "kobe.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Scoring ---
pub const DEFAULT_DAILY_POINTS: i64 = 5;
pub const DEFAULT_LATE_FIRST_TOUCH_POINTS: i64 = 7;
pub const DEFAULT_NEAR_MISS_POINTS: i64 = 6;
pub const DEFAULT_CATCH_UP_POINTS: i64 = 7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
