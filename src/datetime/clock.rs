// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, Local, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc, offset::LocalResult,
};
use chrono_tz::Tz;

pub const fn midnight_naive() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// Re-reads the UTC wall-clock fields of `instant` as a wall-clock time in
/// `tz`.
///
/// The result names the same year, month, day, hour, minute and second as
/// the UTC reading of `instant`, so it usually denotes a different moment
/// in time. Zone transitions are resolved as follows:
///
/// - Unambiguous: use the single mapping.
/// - Ambiguous (e.g. DST fall-back): use the earlier of the two mappings.
/// - Nonexistent (e.g. DST spring-forward): keep the UTC reading and merely
///   attach `tz`, preserving the original instant.
pub fn utc_wall_clock<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> DateTime<Tz> {
    let naive = instant.naive_utc();
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => {
            tracing::warn!(?naive, "ambiguous wall-clock time, picking earliest");
            earlier
        }
        LocalResult::None => {
            tracing::warn!(?naive, "wall-clock time does not exist in target zone");
            Utc.from_utc_datetime(&naive).with_timezone(tz)
        }
    }
}

/// Re-reads the UTC wall-clock fields of `instant` in the host timezone.
pub fn utc_wall_clock_local(instant: &DateTime<Utc>) -> DateTime<Local> {
    utc_wall_clock(instant, &Local)
}

/// Returns the start of the UTC day containing `now`.
pub fn utc_midnight_of(now: &DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&NaiveDateTime::new(now.date_naive(), midnight_naive()))
}

/// Returns the start of the current UTC day.
pub fn utc_midnight() -> DateTime<Utc> {
    utc_midnight_of(&Utc::now())
}

/// Resolves the host timezone from the IANA database.
///
/// Falls back to UTC when the host zone cannot be determined or is missing
/// from the bundled database, logging a warning either way.
pub fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tzid) => match tzid.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!(tzid, "unknown timezone, falling back to UTC");
                chrono_tz::UTC
            }
        },
        Err(err) => {
            tracing::warn!(?err, "Failed to get timezone, using UTC");
            chrono_tz::UTC
        }
    }
}

/// Short timezone label for `tz` at `instant`, e.g. `"EST"` or `"EDT"`.
///
/// Labels are instant-dependent because of daylight saving; zones without
/// an alphabetic abbreviation yield a numeric offset such as `"+0630"`.
pub fn timezone_label_at(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Z").to_string()
}

/// Short label for the host timezone at the current instant.
pub fn current_timezone_label() -> String {
    timezone_label_at(&Utc::now(), system_timezone())
}

/// Converts a 24-hour clock hour to its 12-hour clock equivalent.
fn standard_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// Describes when the day rolls over, as seen from `tz` at `now`.
///
/// Renders the start of the current UTC day on a 12-hour clock in `tz`,
/// e.g. `"7pm EST"` or `"5:30AM IST"`. Minutes are omitted when zero. The
/// meridian is `"pm"` for hours of twelve and later, `"AM"` otherwise.
pub fn refresh_label_at(now: &DateTime<Utc>, tz: Tz) -> String {
    let local = utc_midnight_of(now).with_timezone(&tz);
    let meridian = if local.hour() >= 12 { "pm" } else { "AM" };
    let minutes = if local.minute() == 0 {
        String::new()
    } else {
        format!(":{:02}", local.minute())
    };
    let label = timezone_label_at(now, tz);
    format!("{}{minutes}{meridian} {label}", standard_hour(local.hour()))
        .trim()
        .to_string()
}

/// Describes when the day rolls over, as seen from the host timezone now.
pub fn refresh_label() -> String {
    refresh_label_at(&Utc::now(), system_timezone())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_utc_wall_clock_keeps_utc_fields() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 45).unwrap();
        let dt = utc_wall_clock(&instant, &chrono_tz::America::New_York);
        assert_eq!(dt.naive_local(), instant.naive_utc());
        // 14:30 EST names a later instant than 14:30 UTC.
        assert_eq!(dt.to_utc(), Utc.with_ymd_and_hms(2024, 3, 5, 19, 30, 45).unwrap());
    }

    #[test]
    fn test_utc_wall_clock_in_utc_is_identity() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 45).unwrap();
        assert_eq!(utc_wall_clock(&instant, &Utc), instant);
    }

    #[test]
    fn test_utc_wall_clock_dst_ambiguity_picks_earliest() {
        // 2025-11-02 01:30 happens twice in New York; the earlier one is EDT.
        let instant = Utc.with_ymd_and_hms(2025, 11, 2, 1, 30, 0).unwrap();
        let dt = utc_wall_clock(&instant, &chrono_tz::America::New_York);
        assert_eq!(dt.to_utc(), Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_utc_wall_clock_nonexistent_keeps_instant() {
        // 2025-03-09 02:30 does not exist in New York; spring-forward skips it.
        let instant = Utc.with_ymd_and_hms(2025, 3, 9, 2, 30, 0).unwrap();
        let dt = utc_wall_clock(&instant, &chrono_tz::America::New_York);
        assert_eq!(dt.to_utc(), instant);
        assert_eq!(
            dt.naive_local(),
            Utc.with_ymd_and_hms(2025, 3, 8, 21, 30, 0).unwrap().naive_utc()
        );
    }

    #[test]
    fn test_utc_midnight_of_truncates() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 45).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(utc_midnight_of(&now), midnight);
        assert_eq!(utc_midnight_of(&midnight), midnight);
    }

    #[test]
    fn test_utc_midnight_of_last_second_of_day() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(utc_midnight_of(&now), midnight);
    }

    #[test]
    fn test_timezone_label_tracks_daylight_saving() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let tz = chrono_tz::America::New_York;
        assert_eq!(timezone_label_at(&winter, tz), "EST");
        assert_eq!(timezone_label_at(&summer, tz), "EDT");
        assert_eq!(timezone_label_at(&winter, chrono_tz::UTC), "UTC");
    }

    #[test]
    fn test_standard_hour() {
        assert_eq!(standard_hour(0), 12);
        assert_eq!(standard_hour(5), 5);
        assert_eq!(standard_hour(12), 12);
        assert_eq!(standard_hour(13), 1);
        assert_eq!(standard_hour(23), 11);
    }

    #[test]
    fn test_refresh_label_whole_hour_zone() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let label = refresh_label_at(&now, chrono_tz::America::New_York);
        assert_eq!(label, "7pm EST");
    }

    #[test]
    fn test_refresh_label_follows_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let label = refresh_label_at(&now, chrono_tz::America::New_York);
        assert_eq!(label, "8pm EDT");
    }

    #[test]
    fn test_refresh_label_half_hour_zone() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let label = refresh_label_at(&now, chrono_tz::Asia::Kolkata);
        assert_eq!(label, "5:30AM IST");
    }

    #[test]
    fn test_refresh_label_utc() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let label = refresh_label_at(&now, chrono_tz::UTC);
        assert_eq!(label, "12AM UTC");
    }
}
