// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod leaderboard;
pub mod ranker;
pub mod scheduler;

pub use aggregator::aggregate;
pub use leaderboard::{LeaderboardService, RecomputeSummary};
pub use ranker::{rank, UserScore};
pub use scheduler::spawn_periodic_recompute;
