// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard recompute service.
//!
//! Handles the full pass:
//! 1. Read the published generation and the user list
//! 2. Aggregate points per user (bounded concurrency)
//! 3. Rank once every user has been aggregated
//! 4. Publish the new snapshot in one atomic replace

use crate::config::Config;
use crate::db::LeaderboardStore;
use crate::error::{AppError, Result};
use crate::models::{LeaderboardEntry, LeaderboardSnapshot};
use crate::services::ranker::{rank, UserScore};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt, TryStreamExt};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Source of "now" for entry timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Outcome of a successful recompute pass.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct RecomputeSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub generation: u64,
    pub users: usize,
    pub published_at: String,
}

/// Drives recompute passes and serves the published leaderboard.
pub struct LeaderboardService {
    store: Arc<dyn LeaderboardStore>,
    store_timeout: Duration,
    concurrency: usize,
    /// Held for the whole pass; a second trigger fails fast instead of queueing.
    recompute_lock: Mutex<()>,
    clock: Clock,
}

impl LeaderboardService {
    pub fn new(store: Arc<dyn LeaderboardStore>, config: &Config) -> Self {
        Self {
            store,
            store_timeout: config.store_timeout,
            concurrency: config.aggregation_concurrency.max(1),
            recompute_lock: Mutex::new(()),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the clock (tests pin it for reproducible timestamps).
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Run one full recompute pass and publish the result.
    ///
    /// Fails with `WriteConflict` if another pass is already running. Any
    /// store failure or timeout aborts the pass and leaves the previously
    /// published leaderboard untouched.
    pub async fn recompute(&self) -> Result<RecomputeSummary> {
        let _guard = self.recompute_lock.try_lock().map_err(|_| {
            tracing::warn!("Recompute requested while another pass is running");
            AppError::WriteConflict("A leaderboard recompute is already in progress".to_string())
        })?;

        let started = Instant::now();

        let previous = self
            .with_timeout("get_leaderboard", self.store.get_leaderboard())
            .await?;
        let generation = previous.generation + 1;

        tracing::info!(generation, "Starting leaderboard recompute");

        let users = self
            .with_timeout("list_users", self.store.list_users())
            .await?;

        // One entry per user, even if the store lists someone twice
        let mut seen = HashSet::with_capacity(users.len());
        let users: Vec<(String, String)> = users
            .into_iter()
            .filter_map(|user| {
                if seen.insert(user.email.clone()) {
                    Some((user.email, user.team))
                } else {
                    tracing::warn!(user = %user.email, "Duplicate user in listing, ignoring");
                    None
                }
            })
            .collect();

        // Barrier: ranking only starts once every user has a score
        let scores: HashMap<String, UserScore> = stream::iter(users)
            .map(move |(email, team)| async move {
                let points = self
                    .with_timeout(
                        "total_points_for_user",
                        self.store.total_points_for_user(&email),
                    )
                    .await?;
                tracing::debug!(user = %email, points, "Aggregated user points");
                Ok::<_, AppError>((email, UserScore { points, team }))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await
            .inspect_err(|e| tracing::error!(generation, error = %e, "Aggregation failed"))?;

        let published_at = format_utc_rfc3339((self.clock)());
        let snapshot = LeaderboardSnapshot {
            generation,
            published_at: published_at.clone(),
            entries: rank(scores, &published_at),
        };

        self.with_timeout(
            "replace_leaderboard",
            self.store.replace_leaderboard(&snapshot),
        )
        .await
        .inspect_err(|e| tracing::error!(generation, error = %e, "Publishing leaderboard failed"))?;

        tracing::info!(
            generation,
            users = snapshot.entries.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Leaderboard recompute complete"
        );

        Ok(RecomputeSummary {
            generation,
            users: snapshot.entries.len(),
            published_at,
        })
    }

    /// The most recently published snapshot. Never recomputes.
    pub async fn leaderboard(&self) -> Result<LeaderboardSnapshot> {
        self.with_timeout("get_leaderboard", self.store.get_leaderboard())
            .await
    }

    /// The published entry for one user.
    pub async fn entry(&self, user_email: &str) -> Result<LeaderboardEntry> {
        self.leaderboard()
            .await?
            .entry_for(user_email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No leaderboard entry for {}", user_email)))
    }

    async fn with_timeout<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::time::timeout(self.store_timeout, fut)
            .await
            .map_err(|_| {
                AppError::StorageUnavailable(format!(
                    "{} timed out after {:?}",
                    operation, self.store_timeout
                ))
            })?
    }
}
