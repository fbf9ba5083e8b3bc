// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Tracker API Server
//!
//! Serves the team fitness leaderboard and recomputes it on demand or on
//! a schedule.

use octofit_tracker::{
    config::{Config, StoreBackend},
    db::{FirestoreDb, LeaderboardStore, MemoryStore},
    seed,
    services::{spawn_periodic_recompute, LeaderboardService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, backend = ?config.store_backend, "Starting OctoFit Tracker API");

    let store: Arc<dyn LeaderboardStore> = match config.store_backend {
        StoreBackend::Firestore => Arc::new(FirestoreDb::new(&config.gcp_project_id).await?),
        StoreBackend::Memory => {
            let roster = seed::superhero_roster(chrono::Utc::now());
            tracing::info!(
                users = roster.users.len(),
                activities = roster.activities.len(),
                "Using in-memory store with demo roster"
            );
            Arc::new(MemoryStore::from_seed(&roster).await)
        }
    };

    let leaderboard = Arc::new(LeaderboardService::new(store, &config));

    if let Some(period) = config.recompute_interval {
        spawn_periodic_recompute(leaderboard.clone(), period);
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        leaderboard,
    });

    // Build router
    let app = octofit_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofit_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
