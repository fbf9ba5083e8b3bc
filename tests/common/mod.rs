// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use octofit_tracker::config::Config;
use octofit_tracker::db::{FirestoreDb, MemoryStore};
use octofit_tracker::models::{Activity, User};
use octofit_tracker::routes::create_router;
use octofit_tracker::services::LeaderboardService;
use octofit_tracker::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Fixed timestamp used for every entry produced in tests.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn user(email: &str, team: &str) -> User {
    User {
        email: email.to_string(),
        name: email.to_string(),
        team: team.to_string(),
        created_at: fixed_now(),
    }
}

#[allow(dead_code)]
pub fn activity(email: &str, calories: u32) -> Activity {
    Activity {
        user_email: email.to_string(),
        activity_type: "Running".to_string(),
        duration_minutes: 30,
        calories,
        date: fixed_now(),
    }
}

/// Memory store holding users A (300), B (300) and C (150).
#[allow(dead_code)]
pub async fn abc_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert_user(user("C", "Team DC")).await;
    store.insert_user(user("B", "Team Marvel")).await;
    store.insert_user(user("A", "Team Marvel")).await;
    store.add_activity(activity("A", 100)).await;
    store.add_activity(activity("A", 200)).await;
    store.add_activity(activity("B", 300)).await;
    store.add_activity(activity("C", 150)).await;
    store
}

/// Leaderboard service over `store` with a pinned clock.
#[allow(dead_code)]
pub fn test_service(store: Arc<MemoryStore>) -> Arc<LeaderboardService> {
    Arc::new(LeaderboardService::new(store, &Config::test_default()).with_clock(fixed_now))
}

/// Create a test app over an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(store: Arc<MemoryStore>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        leaderboard: test_service(store),
    });

    (create_router(state.clone()), state)
}
