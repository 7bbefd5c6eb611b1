use super::*;
use time::macros::date;

#[test]
fn age_counts_whole_years() {
    assert_eq!(age_in_years(date!(1990 - 01 - 01), date!(2025 - 06 - 01)), 35);
}

#[test]
fn age_is_not_incremented_before_the_birthday() {
    assert_eq!(age_in_years(date!(1990 - 06 - 02), date!(2025 - 06 - 01)), 34);
    assert_eq!(age_in_years(date!(1990 - 07 - 01), date!(2025 - 06 - 30)), 34);
}

#[test]
fn age_increments_on_the_birthday_itself() {
    assert_eq!(age_in_years(date!(1990 - 06 - 01), date!(2025 - 06 - 01)), 35);
}

#[test]
fn age_for_leap_day_birth_rolls_over_on_march_first() {
    assert_eq!(age_in_years(date!(2000 - 02 - 29), date!(2025 - 02 - 28)), 24);
    assert_eq!(age_in_years(date!(2000 - 02 - 29), date!(2025 - 03 - 01)), 25);
}

#[test]
fn parse_iso_date_accepts_calendar_dates() {
    assert_eq!(parse_iso_date("1990-01-01"), Some(date!(1990 - 01 - 01)));
    assert_eq!(parse_iso_date("2000-02-29"), Some(date!(2000 - 02 - 29)));
}

#[test]
fn parse_iso_date_rejects_sentinels_and_garbage() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("--"), None);
    assert_eq!(parse_iso_date("2001-02-29"), None);
    assert_eq!(parse_iso_date("01/02/1990"), None);
}

#[test]
fn format_last_updated_renders_weekday_month_day_year() {
    // 2025-01-01T00:00:00Z was a Wednesday.
    assert_eq!(format_last_updated(1_735_689_600_000).as_deref(), Some("Wed, Jan 1, 2025"));
    // 2025-06-14T12:00:00Z was a Saturday.
    assert_eq!(format_last_updated(1_749_902_400_000).as_deref(), Some("Sat, Jun 14, 2025"));
}

#[test]
fn format_character_updated_renders_twelve_hour_clock() {
    assert_eq!(
        format_character_updated("2021-12-20T20:39:18.033Z").as_deref(),
        Some("12/20/2021 - 08:39 PM")
    );
    assert_eq!(
        format_character_updated("2021-12-20T08:05:00Z").as_deref(),
        Some("12/20/2021 - 08:05 AM")
    );
}

#[test]
fn format_character_updated_rejects_non_rfc3339_input() {
    assert_eq!(format_character_updated("yesterday"), None);
    assert_eq!(format_character_updated(""), None);
}
