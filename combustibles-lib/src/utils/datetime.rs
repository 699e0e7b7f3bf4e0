use chrono::{NaiveDate, NaiveDateTime};

/// Text layouts accepted for date cells stored as strings.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Text layouts accepted for date cells carrying a time part.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn get_utc_iso_datetime() -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    return timestamp;
}

/// Parse a textual date. Returns `None` for anything that is not a recognizable date,
/// which callers treat as a missing date.
pub fn parse_date_text(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    // Year-month only, e.g. "2024-01" -> first day of the month
    if trimmed.len() == 7 && trimmed.chars().nth(4) == Some('-') {
        return NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok();
    }

    None
}
