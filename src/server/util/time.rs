//! Time window calculations.

use chrono::{Duration, NaiveDateTime};

/// Length of the window that counts as "recent" for accounts and ideas.
pub const RECENT_INTERVAL_DAYS: i64 = 7;

/// Returns true if `timestamp` lies within the last [`RECENT_INTERVAL_DAYS`] days of `now`.
///
/// Timestamps in the future relative to `now` are not considered recent.
///
/// # Arguments
/// - `timestamp` - The point in time to check, e.g. the date an account joined
/// - `now` - Current UTC time
pub fn is_recent(timestamp: NaiveDateTime, now: NaiveDateTime) -> bool {
    let interval = Duration::days(RECENT_INTERVAL_DAYS);

    now - interval <= timestamp && timestamp <= now
}
