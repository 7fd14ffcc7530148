//! Day arithmetic shared by every engine.

use chrono::{DateTime, Utc};

/// Whole days elapsed from `earlier` to `later`.
///
/// Counts complete 24-hour spans and truncates toward zero, so an instant
/// 23 hours after `earlier` is still day 0. Negative when `later` precedes
/// `earlier`.
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn partial_days_truncate() {
        let start = Utc::now();
        assert_eq!(days_between(start + Duration::hours(23), start), 0);
        assert_eq!(days_between(start + Duration::hours(24), start), 1);
        assert_eq!(days_between(start + Duration::hours(47), start), 1);
    }

    #[test]
    fn reversed_order_is_negative() {
        let start = Utc::now();
        assert_eq!(days_between(start, start + Duration::days(3)), -3);
        assert_eq!(days_between(start, start + Duration::hours(5)), 0);
    }
}
