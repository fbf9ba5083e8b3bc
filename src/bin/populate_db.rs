// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Populate Firestore with the demo superhero roster and publish a first
//! leaderboard.
//!
//! Usage: `GCP_PROJECT_ID=... cargo run --bin populate_db`
//! (set FIRESTORE_EMULATOR_HOST to target the emulator).

use anyhow::Context;
use octofit_tracker::{
    config::Config, db::FirestoreDb, seed, services::LeaderboardService,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .context("connecting to Firestore")?;

    println!("Clearing existing data...");
    let deleted = db.clear_all().await.context("clearing collections")?;
    println!("Deleted {} documents", deleted);

    let roster = seed::superhero_roster(chrono::Utc::now());

    println!("Creating teams...");
    for team in &roster.teams {
        db.upsert_team(team).await?;
    }
    println!("Creating users...");
    for user in &roster.users {
        db.upsert_user(user).await?;
    }
    println!("Creating activities...");
    for activity in &roster.activities {
        db.set_activity(activity).await?;
    }
    println!("Creating workouts...");
    for workout in &roster.workouts {
        db.upsert_workout(workout).await?;
    }

    println!("Computing leaderboard...");
    let service = LeaderboardService::new(Arc::new(db), &config);
    let summary = service
        .recompute()
        .await
        .context("publishing initial leaderboard")?;

    println!();
    println!("=== Database Population Complete ===");
    println!("Teams created: {}", roster.teams.len());
    println!("Users created: {}", roster.users.len());
    println!("Activities created: {}", roster.activities.len());
    println!("Leaderboard entries: {}", summary.users);
    println!("Workouts created: {}", roster.workouts.len());
    Ok(())
}
