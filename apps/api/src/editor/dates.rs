//! Date strings as the editor stores them: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
//! or a full RFC 3339 timestamp from the calendar widget.

use chrono::{DateTime, NaiveDate};

/// Parses a stored date into the first day of the period it names.
///
/// Returns `None` for strings in none of the accepted shapes.
pub fn parse_period_start(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    if !(1000..=9999).contains(&year) {
        return None;
    }
    let month: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// True when both dates are present and `end` falls before `start`.
/// Blank or unparseable values never count as out of order.
pub fn ends_before_start(start: &str, end: &str) -> bool {
    match (parse_period_start(start), parse_period_start(end)) {
        (Some(s), Some(e)) => e < s,
        _ => false,
    }
}

/// Formats a stored date as `Mon YYYY` for display. Values that do not parse
/// are shown as typed.
pub fn format_month_year(value: &str) -> String {
    match parse_period_start(value) {
        Some(date) => date.format("%b %Y").to_string(),
        None => value.trim().to_string(),
    }
}
