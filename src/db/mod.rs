// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: the collaborator the leaderboard reads from and publishes to.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{Activity, LeaderboardSnapshot, User};
use crate::services::aggregator::aggregate;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";
    pub const ACTIVITIES: &str = "activities";
    pub const WORKOUTS: &str = "workouts";
    /// Holds a single document with the published snapshot
    pub const LEADERBOARD: &str = "leaderboard";
}

/// Document ID of the published leaderboard snapshot.
pub const LEADERBOARD_DOC_ID: &str = "current";

/// Storage operations consumed by a leaderboard recompute pass.
///
/// Every method may fail with `AppError::StorageUnavailable`.
#[async_trait::async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// All users with their current team.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// All activities owned by a user, in no particular order.
    async fn list_activities_by_user(&self, user_email: &str) -> Result<Vec<Activity>>;

    /// Lifetime points for a user.
    ///
    /// Sums in memory by default. A backend that can aggregate server-side
    /// may override this without changing how ranking works.
    async fn total_points_for_user(&self, user_email: &str) -> Result<i64> {
        let activities = self.list_activities_by_user(user_email).await?;
        let points = aggregate(&activities)?;
        tracing::debug!(
            user = %user_email,
            activities = activities.len(),
            points,
            "Summed user activities"
        );
        Ok(points)
    }

    /// Replace the published leaderboard with `snapshot` in one atomic step.
    ///
    /// Fails with `AppError::WriteConflict` unless `snapshot.generation` is
    /// strictly greater than the currently published generation.
    async fn replace_leaderboard(&self, snapshot: &LeaderboardSnapshot) -> Result<()>;

    /// The most recently published snapshot (empty, generation 0, if none).
    async fn get_leaderboard(&self) -> Result<LeaderboardSnapshot>;
}
