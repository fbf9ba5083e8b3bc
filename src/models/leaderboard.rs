// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Leaderboard entries and published snapshots.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct LeaderboardEntry {
    pub user_email: String,
    /// Copy of the user's team at the time of the pass
    pub team: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: i64,
    /// 1 = most points
    pub rank: u32,
    /// RFC3339 timestamp of the pass that produced this entry
    pub updated_at: String,
}

/// A complete ranked set, published as a unit.
///
/// Stored at: `leaderboard/current`
///
/// Readers see either the previous snapshot or this one, never a mix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct LeaderboardSnapshot {
    /// Monotonically increasing pass number; 0 means nothing was published yet
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(default)]
    pub generation: u64,
    /// RFC3339 publication time (empty when nothing was published)
    #[serde(default)]
    pub published_at: String,
    /// Entries ordered by rank ascending
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    /// Find the entry for a user.
    pub fn entry_for(&self, user_email: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.user_email == user_email)
    }
}
