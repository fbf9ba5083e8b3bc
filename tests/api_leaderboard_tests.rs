// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP tests for the leaderboard routes.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use octofit_tracker::db::MemoryStore;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

async fn send(app: axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = common::create_test_app(Arc::new(MemoryStore::new()));
    let (status, body) = send(app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_leaderboard_empty_before_first_pass() {
    let (app, _) = common::create_test_app(common::abc_store().await);
    let (status, body) = send(app, "GET", "/api/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], 0);
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recompute_then_read() {
    let (app, _) = common::create_test_app(common::abc_store().await);

    let (status, body) = send(app.clone(), "POST", "/api/leaderboard/recompute").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], 1);
    assert_eq!(body["users"], 3);

    let (status, body) = send(app.clone(), "GET", "/api/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    let order: Vec<(&str, i64)> = entries
        .iter()
        .map(|e| {
            (
                e["user_email"].as_str().unwrap(),
                e["rank"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(order, vec![("A", 1), ("B", 2), ("C", 3)]);
    assert_eq!(entries[2]["total_points"], 150);
    assert_eq!(entries[2]["team"], "Team DC");

    let (status, body) = send(app, "GET", "/api/leaderboard/B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rank"], 2);
    assert_eq!(body["total_points"], 300);
}

#[tokio::test]
async fn test_unknown_entry_is_404() {
    let (app, state) = common::create_test_app(common::abc_store().await);
    state.leaderboard.recompute().await.unwrap();

    let (status, body) = send(app, "GET", "/api/leaderboard/nobody@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_storage_outage_is_503_and_board_unchanged() {
    let store = common::abc_store().await;
    let (app, state) = common::create_test_app(store.clone());
    state.leaderboard.recompute().await.unwrap();

    store.set_fail_writes(true);
    let (status, body) = send(app.clone(), "POST", "/api/leaderboard/recompute").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "storage_unavailable");

    let (status, body) = send(app, "GET", "/api/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], 1);
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_read_outage_is_503() {
    let store = common::abc_store().await;
    store.set_fail_reads(true);
    let (app, _) = common::create_test_app(store);

    let (status, body) = send(app, "GET", "/api/leaderboard").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "storage_unavailable");
}
