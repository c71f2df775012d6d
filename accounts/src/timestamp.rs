//! Lenient parsing and display formatting for backend timestamps.
//!
//! The backend serializes `last_login` in whatever shape its ORM produced, so
//! parsing accepts RFC 3339, an offset without a colon (`+0200`), an offset-less datetime (read as UTC), or a bare
//! date (midnight UTC). Display is fixed to a long English month with a
//! 24-hour clock, e.g. `January 2, 2024, 14:05`.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Shown for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const COMPACT_OFFSET_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory][offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    ),
];

const DATETIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year], [hour]:[minute]");

/// Parse a backend timestamp. Returns `None` for anything unrecognised.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    for format in COMPACT_OFFSET_FORMATS {
        if let Ok(parsed) = OffsetDateTime::parse(raw, format) {
            return Some(parsed);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, format) {
            return Some(parsed.assume_utc());
        }
    }
    Date::parse(raw, DATE_FORMAT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Format a parsed timestamp for display.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(DISPLAY_FORMAT)
        .unwrap_or_else(|_| INVALID_DATE.to_owned())
}

/// Format a raw `last_login` value, falling back to [`INVALID_DATE`].
#[must_use]
pub fn format_last_login(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| INVALID_DATE.to_owned(), format_timestamp)
}
