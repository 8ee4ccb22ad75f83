// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timed suspension for UI pacing.

use std::time::Duration;

use chrono::TimeDelta;

/// Suspends the current task for at least `duration`.
///
/// Resolves no earlier than `duration` from now; the exact wake-up time
/// depends on the runtime's timer resolution. Zero and negative durations
/// resolve at the first opportunity. The delay cannot be cancelled other
/// than by dropping the future.
pub async fn delay(duration: TimeDelta) {
    let duration = duration.to_std().unwrap_or(Duration::ZERO);
    tokio::time::sleep(duration).await;
}
