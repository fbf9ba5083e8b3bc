// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reduce a user's activity history to lifetime points.

use crate::error::{AppError, Result};
use crate::models::Activity;

/// Sum calories across `activities`.
///
/// Every activity counts regardless of date or category. An empty history
/// is worth 0 points. Fails with `AppError::Overflow` rather than wrapping.
pub fn aggregate(activities: &[Activity]) -> Result<i64> {
    activities
        .iter()
        .try_fold(0i64, |total, activity| add_points(total, activity.calories))
}

/// Add one activity's calories to a running total.
pub fn add_points(total: i64, calories: u32) -> Result<i64> {
    total.checked_add(i64::from(calories)).ok_or_else(|| {
        AppError::Overflow(format!(
            "adding {} calories to {} exceeds the point range",
            calories, total
        ))
    })
}
