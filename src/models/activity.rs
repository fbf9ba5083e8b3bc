// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored activity record in Firestore.
///
/// Activities are written by ingestion and never mutated by the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Owning user's email (the user's stable id)
    pub user_email: String,
    /// Category label (Running, Swimming, Cycling, etc.)
    pub activity_type: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned; this is what the leaderboard counts as points
    pub calories: u32,
    /// When the activity happened
    pub date: DateTime<Utc>,
}
