/// Kobe system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Aggregate reported for a user without tasks. Deliberately has no decimal part.
pub const EMPTY_KOBE_SCORE: &str = "0";

/// Decimal places used when formatting a non-empty aggregate.
pub const KOBE_SCORE_DECIMALS: u32 = 2;

/// Maximum number of read connections in the storage pool.
pub const MAX_READ_POOL_SIZE: usize = 8;
