//! Calendar helpers for profile and character timestamps.
//!
//! DESIGN
//! ======
//! All formatting and arithmetic is pure over `time` types; the only clock
//! access is [`now_ms`], which reads `js_sys::Date` in the browser and the
//! system clock elsewhere. Callers pass "today" in explicitly so age math
//! stays testable.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Current time in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = OffsetDateTime::now_utc();
        now.unix_timestamp() * 1000 + i64::from(now.millisecond())
    }
}

/// Today's calendar date in UTC.
pub fn today_utc() -> Date {
    OffsetDateTime::from_unix_timestamp(now_ms() / 1000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .date()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`), the shape produced by the
/// birth-date input.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    let fmt = format_description!("[year]-[month]-[day]");
    Date::parse(value, &fmt).ok()
}

/// Difference in whole years between `birth` and `today`.
pub fn age_in_years(birth: Date, today: Date) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month() as u8, today.day()) < (birth.month() as u8, birth.day()) {
        years -= 1;
    }
    years
}

/// Format a profile last-updated timestamp, e.g. `"Sat, Jun 1, 2025"`.
pub fn format_last_updated(epoch_ms: i64) -> Option<String> {
    let fmt = format_description!("[weekday repr:short], [month repr:short] [day padding:none], [year]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(epoch_ms) * 1_000_000)
        .ok()?
        .format(&fmt)
        .ok()
}

/// Format a character record's RFC 3339 modification timestamp,
/// e.g. `"12/20/2021 - 08:39 PM"`.
pub fn format_character_updated(rfc3339: &str) -> Option<String> {
    let fmt = format_description!("[month]/[day]/[year] - [hour repr:12]:[minute] [period]");
    OffsetDateTime::parse(rfc3339, &Rfc3339).ok()?.format(&fmt).ok()
}
