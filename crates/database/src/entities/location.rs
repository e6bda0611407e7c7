//! Location entity definitions

use serde::{Deserialize, Serialize};

/// A geographic point in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Request for creating a new location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}
