//! User and team models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Email address (also used as document ID)
    pub email: String,
    /// Display name
    pub name: String,
    /// Name of the team the user currently belongs to (may be empty)
    #[serde(default)]
    pub team: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

/// Team stored in Firestore, keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}
