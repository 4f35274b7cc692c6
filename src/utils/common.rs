//! Common utility functions

use chrono::{DateTime, NaiveDateTime, Utc};

/// Date format for database storage
pub const DB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert DateTime to database string format
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DB_DATE_FORMAT).to_string()
}

/// Parse database datetime string
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DB_DATE_FORMAT)
        .ok()
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

/// Milliseconds since the Unix epoch
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Lowercase a display name and join its words with dashes
///
/// `"Egyptian Cotton"` becomes `"egyptian-cotton"`.
pub fn kebab_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase a display name with all whitespace removed
///
/// `"Sky Blue"` becomes `"SKYBLUE"`.
pub fn compact_upper(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
