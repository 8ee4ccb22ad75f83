// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and time display helpers shared across the app.

mod clock;
mod format;
mod reformat;

pub use clock::{
    current_timezone_label, refresh_label, refresh_label_at, system_timezone, timezone_label_at,
    utc_midnight, utc_midnight_of, utc_wall_clock, utc_wall_clock_local,
};
pub use format::{describe_date_range, format_date_iso, format_date_long, format_date_us};
pub use reformat::{ReformatError, reformat_date};

pub(crate) use clock::midnight_naive;
