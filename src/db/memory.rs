// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store used by tests and the `memory` backend.
//!
//! The published leaderboard is an `Arc` swapped under a write lock, so a
//! reader clones either the old snapshot or the new one. Faults can be
//! injected to exercise the failure paths of a recompute pass.

use crate::db::LeaderboardStore;
use crate::error::{AppError, Result};
use crate::models::{Activity, LeaderboardSnapshot, User};
use crate::seed::SeedData;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// In-memory implementation of [`LeaderboardStore`].
#[derive(Default)]
pub struct MemoryStore {
    /// Users in insertion order (listing order is part of what tests vary)
    users: RwLock<Vec<User>>,
    activities: RwLock<HashMap<String, Vec<Activity>>>,
    leaderboard: RwLock<Arc<LeaderboardSnapshot>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    read_delay_ms: AtomicU64,
    write_delay_ms: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with seed data.
    pub async fn from_seed(seed: &SeedData) -> Self {
        let store = Self::new();
        for user in &seed.users {
            store.insert_user(user.clone()).await;
        }
        for activity in &seed.activities {
            store.add_activity(activity.clone()).await;
        }
        store
    }

    /// Insert a user, replacing any existing user with the same email.
    pub async fn insert_user(&self, user: User) {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == user.email) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
    }

    pub async fn add_activity(&self, activity: Activity) {
        self.activities
            .write()
            .await
            .entry(activity.user_email.clone())
            .or_default()
            .push(activity);
    }

    /// Make every read fail with `StorageUnavailable`.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every leaderboard write fail with `StorageUnavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Delay every read by `delay`.
    pub fn set_read_delay(&self, delay: Duration) {
        self.read_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Delay every leaderboard write by `delay`.
    pub fn set_write_delay(&self, delay: Duration) {
        self.write_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    async fn before_read(&self) -> Result<()> {
        pause(&self.read_delay_ms).await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::StorageUnavailable(
                "memory store: injected read failure".to_string(),
            ));
        }
        Ok(())
    }
}

async fn pause(delay_ms: &AtomicU64) {
    let ms = delay_ms.load(Ordering::SeqCst);
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[async_trait::async_trait]
impl LeaderboardStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.before_read().await?;
        Ok(self.users.read().await.clone())
    }

    async fn list_activities_by_user(&self, user_email: &str) -> Result<Vec<Activity>> {
        self.before_read().await?;
        Ok(self
            .activities
            .read()
            .await
            .get(user_email)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_leaderboard(&self, snapshot: &LeaderboardSnapshot) -> Result<()> {
        pause(&self.write_delay_ms).await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StorageUnavailable(
                "memory store: injected write failure".to_string(),
            ));
        }

        let mut current = self.leaderboard.write().await;
        if snapshot.generation <= current.generation {
            return Err(AppError::WriteConflict(format!(
                "generation {} is not newer than published generation {}",
                snapshot.generation, current.generation
            )));
        }
        *current = Arc::new(snapshot.clone());
        Ok(())
    }

    async fn get_leaderboard(&self) -> Result<LeaderboardSnapshot> {
        self.before_read().await?;
        let current = Arc::clone(&*self.leaderboard.read().await);
        Ok((*current).clone())
    }
}
