// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod leaderboard;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::{LeaderboardEntry, LeaderboardSnapshot};
pub use user::{Team, User};
pub use workout::Workout;
