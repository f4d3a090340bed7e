// SPDX-License-Identifier: Apache-2.0

//! Habit value projection and qualitative star scoring.
//!
//! The server recomputes task values itself; the projector only keeps the
//! locally displayed rating in sync with a mutation that was just issued,
//! without refetching. Curve constants follow the service's published
//! task-value formula.

use crate::models::Direction;

/// Base of the task-value curve.
pub const TASK_VALUE_BASE: f64 = 0.9747;

/// Upper bounds of the qualitative score buckets.
const BREAKPOINTS: [f64; 6] = [-20.0, -10.0, -1.0, 1.0, 5.0, 10.0];

/// Star strings for the 7 buckets, worst to best.
const SCORES: [&str; 7] = ["*", "**", "***", "****", "*****", "******", "*******"];

/// Project a task value after scoring it in `direction`.
///
/// Up: `v + BASE^v`; down: `v - BASE^v`. Pure, no side effects.
#[must_use]
pub fn project_value(value: f64, direction: Direction) -> f64 {
    let delta = TASK_VALUE_BASE.powf(value);
    match direction {
        Direction::Up => value + delta,
        Direction::Down => value - delta,
    }
}

/// Map a task value to a 1-7 star rating.
///
/// The bucket is chosen by the first breakpoint strictly greater than the
/// value, so the function is a monotonic step: for any `v1 < v2`,
/// `qualitative_score(v1).len() <= qualitative_score(v2).len()`.
#[must_use]
pub fn qualitative_score(value: f64) -> &'static str {
    let bucket = BREAKPOINTS
        .iter()
        .position(|&b| value < b)
        .unwrap_or(BREAKPOINTS.len());
    SCORES[bucket]
}
