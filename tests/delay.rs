// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for timed suspension.

use std::time::{Duration, Instant};

use chrono::TimeDelta;
use daily_integral_time::delay;

#[tokio::test]
async fn test_delay_sequencing() {
    let begin = Instant::now();
    delay(TimeDelta::milliseconds(10)).await;
    delay(TimeDelta::milliseconds(10)).await;
    assert!(begin.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
async fn test_delay_tolerates_nonpositive_durations() {
    delay(TimeDelta::zero()).await;
    delay(TimeDelta::seconds(-1)).await;
}
