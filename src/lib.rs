// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OctoFit Tracker: leaderboard backend for a team fitness challenge
//!
//! This crate aggregates logged activities into per-user points, ranks
//! every user, and publishes the ranked leaderboard atomically.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod time_utils;

use config::Config;
use services::LeaderboardService;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub leaderboard: Arc<LeaderboardService>,
}
