//! Time utilities: parse the operator's clock input and format log stamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Time-of-day formats accepted at the clock prompt.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Full date-time formats, for sessions that start on another day.
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Parse clock input. A bare time of day is anchored on `day`.
pub fn parse_clock_input(input: &str, day: NaiveDate) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(t) = parse_time(input) {
        return Some(day.and_time(t));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// `HH:MM:SS`, the stamp used in front of every log entry.
pub fn format_stamp(t: &NaiveDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}
