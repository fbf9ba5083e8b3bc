// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Turn per-user scores into a gap-free ranking.
//!
//! Order is points descending, then user email ascending, so the output
//! never depends on map iteration order. Every entry gets its own rank
//! (1, 2, 3, ...) even when points tie.

use crate::models::LeaderboardEntry;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A user's points for one pass plus the team to copy onto the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScore {
    pub points: i64,
    pub team: String,
}

/// Rank every user in `scores`. Empty input yields an empty board.
pub fn rank(scores: HashMap<String, UserScore>, updated_at: &str) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<(String, UserScore)> = scores.into_iter().collect();
    ordered.sort_by(|(a_email, a), (b_email, b)| compare(a_email, a.points, b_email, b.points));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|((user_email, score), rank)| LeaderboardEntry {
            user_email,
            team: score.team,
            total_points: score.points,
            rank,
            updated_at: updated_at.to_string(),
        })
        .collect()
}

fn compare(a_email: &str, a_points: i64, b_email: &str, b_points: i64) -> Ordering {
    b_points
        .cmp(&a_points)
        .then_with(|| a_email.cmp(b_email))
}
