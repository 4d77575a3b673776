use chrono::{NaiveDate, NaiveDateTime};

/// Parse a date field under the configured chrono format, trying the format
/// as a full datetime first and as a plain date (at midnight) second.
pub fn parse_date(date_str: &str, format: &str) -> Option<NaiveDateTime> {
    if date_str.trim().is_empty() {
        return None;
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(date_str, format) {
        return Some(datetime);
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
