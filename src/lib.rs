// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and time display helpers for the Daily Integral app.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

pub mod datetime;
pub mod delay;
pub mod streak;

pub use crate::datetime::{
    ReformatError, current_timezone_label, describe_date_range, format_date_iso, format_date_long,
    format_date_us, refresh_label, refresh_label_at, reformat_date, system_timezone,
    timezone_label_at, utc_midnight, utc_midnight_of, utc_wall_clock, utc_wall_clock_local,
};
pub use crate::delay::delay;
pub use crate::streak::{
    InvalidSolveStatus, SolveLog, SolveStatus, Streak, current_streak, longest_streak,
    solve_status_on, within_daily_window,
};
