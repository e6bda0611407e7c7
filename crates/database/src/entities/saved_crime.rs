//! Saved-crime bookmark entity definitions

use serde::{Deserialize, Serialize};

/// A user's bookmark of a specific crime-at-location row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCrime {
    pub id: i64,
    pub user_id: i64,
    pub crime_location_id: i64,
}

/// Request for bookmarking a crime-location for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSavedCrimeRequest {
    pub user_id: i64,
    pub crime_location_id: i64,
}
