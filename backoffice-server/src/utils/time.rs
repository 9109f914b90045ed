//! Time helpers
//!
//! All timestamps in the data layer are `i64` Unix millis; date arithmetic
//! happens here and in the billing layer, never inside queries.

/// One day in Unix millis
pub const DAY_MILLIS: i64 = 86_400_000;

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `millis` shifted by a whole number of days
pub fn plus_days(millis: i64, days: i64) -> i64 {
    millis + days * DAY_MILLIS
}
