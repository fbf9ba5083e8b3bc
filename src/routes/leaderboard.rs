// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard read and recompute routes.

use crate::error::Result;
use crate::models::{LeaderboardEntry, LeaderboardSnapshot};
use crate::services::RecomputeSummary;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/leaderboard/recompute", post(recompute))
        .route("/api/leaderboard/{email}", get(get_entry))
}

/// The most recently published leaderboard, ranked ascending.
async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Result<Json<LeaderboardSnapshot>> {
    Ok(Json(state.leaderboard.leaderboard().await?))
}

async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<LeaderboardEntry>> {
    Ok(Json(state.leaderboard.entry(&email).await?))
}

/// Run a recompute pass now. 409 if one is already running.
async fn recompute(State(state): State<Arc<AppState>>) -> Result<Json<RecomputeSummary>> {
    tracing::info!("Recompute requested via API");
    Ok(Json(state.leaderboard.recompute().await?))
}
