// src/deadline.rs
// Normalizes a human-written deadline into a canonical timestamp.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Accepted input formats, tried in order. Long month names are the
/// English ones chrono knows ("15 June 2024", "June 15, 2024").
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%d %B %Y", "%B %d, %Y"];

/// Parse `raw` against the known formats; the first match wins and
/// yields midnight of that calendar date, offset-free.
///
/// An unrecognized or empty string falls back to now (UTC) plus 30
/// days. That fallback is policy, not an error: callers never observe
/// a parse failure here.
pub fn normalize(raw: &str) -> NaiveDateTime {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_time(NaiveTime::MIN);
        }
    }
    Utc::now().naive_utc() + Duration::days(30)
}
