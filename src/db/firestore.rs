// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users, teams and workouts (seed and profile storage)
//! - Activities (queried per user for aggregation)
//! - The published leaderboard snapshot (`leaderboard/current`)

use crate::db::{collections, LeaderboardStore, LEADERBOARD_DOC_ID};
use crate::error::{AppError, Result};
use crate::models::{Activity, LeaderboardSnapshot, Team, User, Workout};

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Document ID for an activity: owner email plus start time in millis.
pub fn activity_doc_id(activity: &Activity) -> String {
    format!(
        "{}_{}",
        activity.user_email,
        activity.date.timestamp_millis()
    )
}

fn unavailable(e: impl std::fmt::Display) -> AppError {
    AppError::StorageUnavailable(e.to_string())
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| unavailable(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| unavailable(format!("Failed to connect to Firestore Emulator: {}", e)))?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return `StorageUnavailable` if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb> {
        self.client
            .as_ref()
            .ok_or_else(|| unavailable("Database not connected (offline mode)"))
    }

    // ─── Seed Writes ─────────────────────────────────────────────

    /// Create or update a user (keyed by email).
    pub async fn upsert_user(&self, user: &User) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.email)
            .object(user)
            .execute()
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    /// Create or update a team (keyed by name).
    pub async fn upsert_team(&self, team: &Team) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::TEAMS)
            .document_id(&team.name)
            .object(team)
            .execute()
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    /// Store an activity.
    pub async fn set_activity(&self, activity: &Activity) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(activity_doc_id(activity))
            .object(activity)
            .execute()
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    /// Create or update a workout (keyed by name).
    pub async fn upsert_workout(&self, workout: &Workout) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::WORKOUTS)
            .document_id(&workout.name)
            .object(workout)
            .execute()
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    // ─── Helper Methods ────────────────────────────────────────────

    /// Helper to batch delete documents using transactions.
    async fn batch_delete<T, F>(&self, items: &[T], collection: &str, id_extractor: F) -> Result<()>
    where
        F: Fn(&T) -> String,
    {
        let client = self.get_client()?;

        for chunk in items.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| unavailable(format!("Failed to begin transaction: {}", e)))?;

            for item in chunk {
                let doc_id = id_extractor(item);
                client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(&doc_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        unavailable(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction
                .commit()
                .await
                .map_err(|e| unavailable(format!("Failed to commit batch deletion: {}", e)))?;
        }

        Ok(())
    }

    async fn list_all<T>(&self, collection: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(unavailable)
    }

    /// Delete every user, team, activity, workout and the published
    /// leaderboard. Used before re-seeding.
    ///
    /// Returns the number of documents deleted.
    pub async fn clear_all(&self) -> Result<usize> {
        let mut deleted_count = 0;

        let activities: Vec<Activity> = self.list_all(collections::ACTIVITIES).await?;
        self.batch_delete(&activities, collections::ACTIVITIES, activity_doc_id)
            .await?;
        deleted_count += activities.len();

        let users: Vec<User> = self.list_all(collections::USERS).await?;
        self.batch_delete(&users, collections::USERS, |u: &User| u.email.clone())
            .await?;
        deleted_count += users.len();

        let teams: Vec<Team> = self.list_all(collections::TEAMS).await?;
        self.batch_delete(&teams, collections::TEAMS, |t: &Team| t.name.clone())
            .await?;
        deleted_count += teams.len();

        let workouts: Vec<Workout> = self.list_all(collections::WORKOUTS).await?;
        self.batch_delete(&workouts, collections::WORKOUTS, |w: &Workout| {
            w.name.clone()
        })
        .await?;
        deleted_count += workouts.len();

        self.get_client()?
            .fluent()
            .delete()
            .from(collections::LEADERBOARD)
            .document_id(LEADERBOARD_DOC_ID)
            .execute()
            .await
            .map_err(unavailable)?;

        tracing::info!(deleted_count, "Cleared all collections");

        Ok(deleted_count)
    }
}

#[async_trait::async_trait]
impl LeaderboardStore for FirestoreDb {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_all(collections::USERS).await
    }

    async fn list_activities_by_user(&self, user_email: &str) -> Result<Vec<Activity>> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(|q| q.for_all([q.field("user_email").eq(user_email)]))
            .obj()
            .query()
            .await
            .map_err(unavailable)
    }

    /// Publish a snapshot as one document write inside a transaction.
    ///
    /// A single document replace is atomic for readers. The published
    /// generation is read through the transaction, so a concurrent publish
    /// of the same document makes one of the two commits fail instead of
    /// both succeeding.
    async fn replace_leaderboard(&self, snapshot: &LeaderboardSnapshot) -> Result<()> {
        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| unavailable(format!("Failed to begin transaction: {}", e)))?;

        let tx_client = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );
        let current = read_leaderboard(&tx_client).await?;
        if snapshot.generation <= current.generation {
            let _ = transaction.rollback().await;
            return Err(AppError::WriteConflict(format!(
                "generation {} is not newer than published generation {}",
                snapshot.generation, current.generation
            )));
        }

        client
            .fluent()
            .update()
            .in_col(collections::LEADERBOARD)
            .document_id(LEADERBOARD_DOC_ID)
            .object(snapshot)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                unavailable(format!("Failed to add leaderboard to transaction: {}", e))
            })?;

        transaction.commit().await.map_err(|e| match e {
            firestore::errors::FirestoreError::DataConflictError(_) => AppError::WriteConflict(
                format!("Leaderboard changed during publish: {}", e),
            ),
            e => unavailable(format!("Transaction commit failed: {}", e)),
        })?;

        tracing::info!(
            generation = snapshot.generation,
            entries = snapshot.entries.len(),
            "Leaderboard snapshot published"
        );

        Ok(())
    }

    async fn get_leaderboard(&self) -> Result<LeaderboardSnapshot> {
        read_leaderboard(self.get_client()?).await
    }
}

/// Read `leaderboard/current`; an unpublished board is generation 0.
async fn read_leaderboard(client: &firestore::FirestoreDb) -> Result<LeaderboardSnapshot> {
    let snapshot: Option<LeaderboardSnapshot> = client
        .fluent()
        .select()
        .by_id_in(collections::LEADERBOARD)
        .obj()
        .one(LEADERBOARD_DOC_ID)
        .await
        .map_err(unavailable)?;
    Ok(snapshot.unwrap_or_default())
}
