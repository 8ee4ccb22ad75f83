// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Solve history and streak bookkeeping.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::datetime::{describe_date_range, midnight_naive};

/// Seconds in one day, the base length of the daily solve window.
const DAY_SECONDS: i64 = 86_400;

/// Grace period granted past the end of the daily solve window.
const DAILY_LEEWAY_SECONDS: i64 = 90;

/// Per-date solve outcome, stored as a bare integer code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SolveStatus {
    /// Never solved. Code `0`.
    #[default]
    Unsolved,

    /// Solved after its day had passed. Code `1`.
    Solved,

    /// Solved while it was the daily problem. Code `2`.
    SolvedDaily,
}

impl SolveStatus {
    /// Whether the problem was solved at all.
    pub fn is_solved(&self) -> bool {
        !matches!(self, SolveStatus::Unsolved)
    }

    /// Whether the problem was solved while it was the daily.
    pub fn is_daily(&self) -> bool {
        matches!(self, SolveStatus::SolvedDaily)
    }
}

impl From<SolveStatus> for u8 {
    fn from(status: SolveStatus) -> Self {
        match status {
            SolveStatus::Unsolved => 0,
            SolveStatus::Solved => 1,
            SolveStatus::SolvedDaily => 2,
        }
    }
}

impl TryFrom<u8> for SolveStatus {
    type Error = InvalidSolveStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SolveStatus::Unsolved),
            1 => Ok(SolveStatus::Solved),
            2 => Ok(SolveStatus::SolvedDaily),
            code => Err(InvalidSolveStatus(code)),
        }
    }
}

/// Error raised when a solve status code is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid solve status code: {0}, expected 0, 1 or 2")]
pub struct InvalidSolveStatus(u8);

/// A user's solve history, keyed by problem date.
///
/// Matches the backend wire shape: a JSON object mapping `YYYY-MM-DD` keys
/// to integer status codes.
pub type SolveLog = BTreeMap<NaiveDate, SolveStatus>;

/// Status recorded for `date`, with absent entries read as unsolved.
pub fn solve_status_on(log: &SolveLog, date: NaiveDate) -> SolveStatus {
    log.get(&date).copied().unwrap_or_default()
}

/// An inclusive run of consecutive solved days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    /// First solved day of the run.
    pub start: NaiveDate,

    /// Last solved day of the run.
    pub end: NaiveDate,
}

impl Streak {
    /// Length of the run in days; a single-day streak counts as 1.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Renders the run as a day count and a `"(MM/DD/YY) - (MM/DD/YY)"`
    /// label.
    pub fn describe(&self) -> (i64, String) {
        describe_date_range(&at_utc_midnight(self.start), &at_utc_midnight(self.end))
    }
}

fn at_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&NaiveDateTime::new(date, midnight_naive()))
}

fn solved_dates(log: &SolveLog) -> impl Iterator<Item = NaiveDate> + '_ {
    log.iter()
        .filter(|(_, status)| status.is_solved())
        .map(|(date, _)| *date)
}

/// Finds the longest run of consecutive solved days in `log`.
///
/// Unsolved entries break a run just like missing dates do. Ties go to the
/// earliest run. Returns `None` when nothing was ever solved.
pub fn longest_streak(log: &SolveLog) -> Option<Streak> {
    let mut best: Option<Streak> = None;
    let mut current: Option<Streak> = None;
    for date in solved_dates(log) {
        let run = match current {
            Some(run) if (date - run.end).num_days() == 1 => Streak {
                start: run.start,
                end: date,
            },
            _ => Streak {
                start: date,
                end: date,
            },
        };
        if best.map_or(true, |b| run.days() > b.days()) {
            best = Some(run);
        }
        current = Some(run);
    }
    best
}

/// Finds the still-running streak as of `today`, if any.
///
/// The trailing run of consecutive solved days counts as current when it
/// ends today or yesterday, so a streak survives until a full day is
/// missed. Returns `None` otherwise.
pub fn current_streak(log: &SolveLog, today: NaiveDate) -> Option<Streak> {
    let mut current: Option<Streak> = None;
    for date in solved_dates(log) {
        current = Some(match current {
            Some(run) if (date - run.end).num_days() == 1 => Streak {
                start: run.start,
                end: date,
            },
            _ => Streak {
                start: date,
                end: date,
            },
        });
    }
    current.filter(|run| (today - run.end).num_days() <= 1)
}

/// Whether a solve submitted at `submitted` still counts as a daily solve
/// for a problem assigned at `assigned`.
///
/// The window is one day plus a 90 second grace period for submissions
/// racing the rollover. Submissions dated before the assignment instant
/// are inside the window.
pub fn within_daily_window(assigned: &DateTime<Utc>, submitted: &DateTime<Utc>) -> bool {
    (*submitted - *assigned) < TimeDelta::seconds(DAY_SECONDS + DAILY_LEEWAY_SECONDS)
}
