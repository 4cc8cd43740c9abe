use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Prefix a file name with the calendar date of `t`: `2025-06-14 Radio Log.txt`.
pub fn date_prefixed(t: &NaiveDateTime, file_name: &str) -> String {
    format!("{} {}", t.format("%Y-%m-%d"), file_name)
}
