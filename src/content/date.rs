//! Calendar date parsing and display formatting for case study metadata.

use time::Date;
use time::macros::format_description;

use super::ContentError;

/// Parse an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ContentError::InvalidDate`] when the input is not a valid
/// calendar date in that exact shape.
pub fn parse_date(raw: &str) -> Result<Date, ContentError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ContentError::InvalidDate(raw.to_owned()))
}

/// Format a date as US long form, e.g. `May 1, 2023`.
#[must_use]
pub fn format_long(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// Parse and format an ISO date string for display.
///
/// # Errors
///
/// Returns [`ContentError::InvalidDate`] when `raw` does not parse.
pub fn format_date(raw: &str) -> Result<String, ContentError> {
    parse_date(raw).map(format_long)
}

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;
