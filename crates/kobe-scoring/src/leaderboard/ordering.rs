//! Ordering of formatted aggregates.
//!
//! Scores are split on `.` and compared as integers component by component,
//! left to right. This is not numeric order: `"10.50"` outranks `"10.5"`
//! because 50 > 5, and `"0.00"` outranks `"0"` because it has more
//! components.

use std::cmp::Ordering;

/// Comparator for a descending leaderboard: `Less` means `a` ranks above `b`.
///
/// A component that does not start with an integer is skipped.
pub fn leaderboard_order(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();

    for (x, y) in a_parts.iter().zip(&b_parts) {
        if let (Some(x), Some(y)) = (leading_integer(x), leading_integer(y)) {
            match x.cmp(&y) {
                Ordering::Greater => return Ordering::Less,
                Ordering::Less => return Ordering::Greater,
                Ordering::Equal => {}
            }
        }
    }

    // All shared components tie: the longer expansion ranks higher.
    b_parts.len().cmp(&a_parts.len())
}

/// The optionally signed integer prefix of `part`, if any.
fn leading_integer(part: &str) -> Option<i64> {
    let trimmed = part.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |i| i + sign_len);
    trimmed[..end].parse().ok()
}
