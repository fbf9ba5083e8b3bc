// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Suggested workout model.

use serde::{Deserialize, Serialize};

/// A suggested workout. Reference data only; it does not affect points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub name: String,
    pub description: String,
    /// Free-form difficulty label ("Medium", "Hard", "Extreme")
    pub difficulty: String,
    pub duration_minutes: u32,
    /// Comma-separated muscle groups
    pub target_muscles: String,
}
