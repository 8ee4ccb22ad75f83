// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use regex::Regex;

use crate::datetime::format::month_abbrev;

/// Error raised when a date string cannot be reformatted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReformatError {
    /// The input did not match `YYYY-MM-DD` or named an impossible month
    /// or day.
    #[error("Invalid date format: {0}, expected YYYY-MM-DD")]
    InvalidFormat(String),
}

/// Reformats a `YYYY-MM-DD` date string as `"Mon D, YYYY"`, e.g.
/// `"2024-01-01"` into `"Jan 1, 2024"`.
///
/// The input must be exactly ten characters with two-digit month and day;
/// anything else fails with [`ReformatError::InvalidFormat`], as do months
/// outside 1..=12 and days outside 1..=31. Day and year lose their zero
/// padding in the output. The day is not checked against the month length,
/// so `"2024-02-31"` reformats cleanly; this is purely a display transform,
/// not calendar validation.
pub fn reformat_date(date_str: &str) -> Result<String, ReformatError> {
    const RE: &str = r"^(\d{4})-(\d{2})-(\d{2})$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let invalid = || ReformatError::InvalidFormat(date_str.to_string());
    let captures = re.captures(date_str).ok_or_else(invalid)?;
    let year: u32 = captures[1].parse().map_err(|_| invalid())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid())?;
    let day: u32 = captures[3].parse().map_err(|_| invalid())?;
    if !(1..=31).contains(&day) {
        return Err(invalid());
    }

    // The table lookup doubles as the month range check.
    let month = month_abbrev(month).ok_or_else(invalid)?;
    Ok(format!("{month} {day}, {year}"))
}
