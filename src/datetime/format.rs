// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Datelike, Utc, Weekday};

/// Fixed English month abbreviations, indexed by month number minus one.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Looks up the English abbreviation for a 1-based month number.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_ABBREVS.get(index).copied()
}

/// Fixed English weekday abbreviation.
fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Renders the UTC calendar date of `instant` as `YYYY-MM-DD`.
///
/// Month and day are zero-padded to two digits; the year is written as-is.
pub fn format_date_iso(instant: &DateTime<Utc>) -> String {
    format!(
        "{}-{:02}-{:02}",
        instant.year(),
        instant.month(),
        instant.day()
    )
}

/// Renders the UTC calendar date of `instant` as `MM/DD/YY`.
///
/// All three components are zero-padded to two digits; the year is reduced
/// modulo 100.
pub fn format_date_us(instant: &DateTime<Utc>) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        instant.month(),
        instant.day(),
        instant.year().rem_euclid(100)
    )
}

/// Renders the UTC calendar date of `instant` as `"Ddd, Mon DD, YYYY"`,
/// e.g. `"Tue, Mar 05, 2024"`.
///
/// Weekday and month come from the fixed English abbreviation tables and are
/// derived from the UTC fields, so the output never depends on the host
/// timezone. The instant is not checked against the current date; callers
/// decide whether future dates are acceptable.
pub fn format_date_long(instant: &DateTime<Utc>) -> String {
    let month = month_abbrev(instant.month()).expect("chrono months are always in 1..=12");
    format!(
        "{}, {} {:02}, {}",
        weekday_abbrev(instant.weekday()),
        month,
        instant.day(),
        instant.year()
    )
}

/// Describes the inclusive calendar-day span between `start` and `end`.
///
/// Returns the day count, `floor((end - start) / 24h) + 1`, and a label of
/// the form `"(MM/DD/YY) - (MM/DD/YY)"`. The floor tolerates sub-day drift
/// between endpoints taken from skewed clocks. Expects `start <= end`; the
/// result for a reversed pair is unspecified. Equal endpoints count as a
/// single day.
pub fn describe_date_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> (i64, String) {
    let days = (*end - *start).num_days() + 1;
    let label = format!("({}) - ({})", format_date_us(start), format_date_us(end));
    (days, label)
}
