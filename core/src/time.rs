//! Time related utils.

/// UTC timestamps used across tripsign.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Current UTC time.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Whole seconds since the Unix epoch.
///
/// The gateway signature scheme runs at one-second granularity; fractional
/// seconds are floored away.
pub fn unix_seconds(t: DateTime) -> i64 {
    t.timestamp()
}
