//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339};

/// Placeholder for absent values.
pub const EMPTY_CELL: &str = "—";

/// Render a timestamp as `DD.MM.YYYY`.
///
/// RFC 3339 timestamps keep their own offset (no conversion to local time).
/// Anything starting with `YYYY-MM-DD` falls back to that date; other input
/// is shown as-is.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return EMPTY_CELL.to_owned();
    };
    parse_date(raw)
        .and_then(|date| date.format(format_description!("[day].[month].[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    let head = raw.get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Deferral period with its unit label.
pub fn format_deferral_days(days: u32) -> String {
    format!("{days} дней")
}
