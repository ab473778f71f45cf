//! Date parsing and display in the `dd-mm-yyyy` form the UI uses.
//!
//! The API mixes plain ISO dates, RFC 3339 timestamps, and epoch
//! milliseconds; every formatter accepts all three and falls back to the
//! raw text when nothing parses.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DMY: &[FormatItem<'static>] = format_description!("[day]-[month]-[year]");
const DMY_HM: &[FormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]");
const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse any of the API's date encodings into a UTC timestamp.
pub fn parse_api_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return from_millis(millis);
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    match Date::parse(date_part, ISO_DATE) {
        Ok(date) => Some(date.midnight().assume_utc()),
        Err(e) => {
            log::debug!("unrecognized date {raw:?}: {e}");
            None
        }
    }
}

pub fn from_millis(millis: i64) -> Option<OffsetDateTime> {
    match OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000) {
        Ok(dt) => Some(dt),
        Err(e) => {
            log::debug!("timestamp {millis} out of range: {e}");
            None
        }
    }
}

fn render(dt: OffsetDateTime, format: &[FormatItem<'static>]) -> Option<String> {
    match dt.format(format) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("formatting {dt} failed: {e}");
            None
        }
    }
}

/// `2024-05-03` / `2024-05-03T10:00:00Z` / `1714730400000` → `03-05-2024`.
pub fn format_date_dmy(raw: &str) -> String {
    parse_api_date(raw)
        .and_then(|dt| render(dt, DMY))
        .unwrap_or_else(|| raw.to_owned())
}

pub fn format_millis_dmy(millis: i64) -> String {
    from_millis(millis).and_then(|dt| render(dt, DMY)).unwrap_or_default()
}

pub fn format_millis_datetime(millis: i64) -> String {
    from_millis(millis).and_then(|dt| render(dt, DMY_HM)).unwrap_or_default()
}

/// Current time in epoch milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_millis() -> i64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc().unix_timestamp_nanos().div_euclid(1_000_000) as i64
    }
}
