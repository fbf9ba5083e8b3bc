// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (FIRESTORE_EMULATOR_HOST set). They share one emulator database, so they
//! live in a single test to keep the leaderboard document uncontended.

use octofit_tracker::config::Config;
use octofit_tracker::db::LeaderboardStore;
use octofit_tracker::error::AppError;
use octofit_tracker::models::LeaderboardSnapshot;
use octofit_tracker::seed;
use octofit_tracker::services::LeaderboardService;
use std::sync::Arc;

mod common;
use common::{activity, fixed_now, test_db, user};

#[tokio::test]
async fn test_firestore_leaderboard_lifecycle() {
    require_emulator!();

    let db = test_db().await;
    db.clear_all().await.unwrap();

    // Nothing published yet
    let empty = db.get_leaderboard().await.unwrap();
    assert_eq!(empty, LeaderboardSnapshot::default());

    // Activities are listed per user
    for (email, team) in [("A", "Team Marvel"), ("B", "Team Marvel"), ("C", "Team DC")] {
        db.upsert_user(&user(email, team)).await.unwrap();
    }
    let mut a1 = activity("A", 100);
    a1.date = a1.date - chrono::Duration::hours(1);
    db.set_activity(&a1).await.unwrap();
    db.set_activity(&activity("A", 200)).await.unwrap();
    db.set_activity(&activity("B", 300)).await.unwrap();
    db.set_activity(&activity("C", 150)).await.unwrap();

    let a_activities = db.list_activities_by_user("A").await.unwrap();
    assert_eq!(a_activities.len(), 2);
    assert_eq!(db.total_points_for_user("A").await.unwrap(), 300);

    // Full pass publishes one snapshot
    let service = LeaderboardService::new(Arc::new(db.clone()), &Config::test_default())
        .with_clock(fixed_now);
    let summary = service.recompute().await.unwrap();
    assert_eq!(summary.generation, 1);

    let board = db.get_leaderboard().await.unwrap();
    let ranked: Vec<(&str, u32)> = board
        .entries
        .iter()
        .map(|e| (e.user_email.as_str(), e.rank))
        .collect();
    assert_eq!(ranked, vec![("A", 1), ("B", 2), ("C", 3)]);

    // Stale generation is rejected and leaves the board intact
    let stale = LeaderboardSnapshot {
        generation: 1,
        published_at: "2020-01-01T00:00:00Z".to_string(),
        entries: vec![],
    };
    let err = db.replace_leaderboard(&stale).await.unwrap_err();
    assert!(matches!(err, AppError::WriteConflict(_)));
    assert_eq!(db.get_leaderboard().await.unwrap(), board);

    // Two publishers racing on the same next generation: exactly one commits
    let first = LeaderboardSnapshot {
        generation: 2,
        published_at: "2024-06-01T12:00:01Z".to_string(),
        entries: board.entries.clone(),
    };
    let second = LeaderboardSnapshot {
        generation: 2,
        published_at: "2024-06-01T12:00:02Z".to_string(),
        entries: vec![],
    };
    let other = db.clone();
    let (r1, r2) = tokio::join!(
        db.replace_leaderboard(&first),
        other.replace_leaderboard(&second)
    );
    assert_eq!(
        r1.is_ok() as u8 + r2.is_ok() as u8,
        1,
        "exactly one racing publish must win: {:?} / {:?}",
        r1,
        r2
    );
    let winner = if r1.is_ok() { &first } else { &second };
    let loser_err = if r1.is_ok() { r2 } else { r1 }.unwrap_err();
    assert!(matches!(
        loser_err,
        AppError::WriteConflict(_) | AppError::StorageUnavailable(_)
    ));
    assert_eq!(&db.get_leaderboard().await.unwrap(), winner);

    // Seed roster round-trips and clear_all removes it again
    let roster = seed::superhero_roster(fixed_now());
    db.clear_all().await.unwrap();
    for u in &roster.users {
        db.upsert_user(u).await.unwrap();
    }
    for a in &roster.activities {
        db.set_activity(a).await.unwrap();
    }
    let summary = service.recompute().await.unwrap();
    assert_eq!(summary.users, roster.users.len());
    assert_eq!(summary.generation, 1);

    let deleted = db.clear_all().await.unwrap();
    assert_eq!(deleted, roster.users.len() + roster.activities.len());
}
