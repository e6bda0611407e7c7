//! Crime entity definitions

use serde::{Deserialize, Serialize};

/// Catalog entry for a crime category. Crime names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crime {
    pub id: i64,
    pub crime_name: String,
}

/// Request for creating a new crime catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCrimeRequest {
    pub crime_name: String,
}
