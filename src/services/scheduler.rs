// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Periodic recompute trigger.

use crate::error::AppError;
use crate::services::LeaderboardService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawn a background loop that recomputes the leaderboard every `period`.
///
/// The first pass runs immediately. A failed pass is logged and the next
/// tick tries again; the published board stays as it was.
pub fn spawn_periodic_recompute(
    service: Arc<LeaderboardService>,
    period: Duration,
) -> JoinHandle<()> {
    tracing::info!(period_secs = period.as_secs(), "Starting periodic leaderboard recompute");

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            match service.recompute().await {
                Ok(summary) => tracing::debug!(
                    generation = summary.generation,
                    users = summary.users,
                    "Scheduled recompute succeeded"
                ),
                Err(AppError::WriteConflict(reason)) => {
                    tracing::info!(reason = %reason, "Scheduled recompute skipped")
                }
                Err(e) => tracing::error!(error = %e, "Scheduled recompute failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::{LeaderboardStore, MemoryStore};

    #[tokio::test]
    async fn test_first_tick_publishes_immediately() {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(LeaderboardService::new(
            store.clone(),
            &Config::test_default(),
        ));

        let handle = spawn_periodic_recompute(service, Duration::from_secs(3600));

        let mut generation = 0;
        for _ in 0..50 {
            generation = store.get_leaderboard().await.unwrap().generation;
            if generation > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.abort();

        assert_eq!(generation, 1);
    }
}
