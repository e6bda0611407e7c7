//! Crime-location join entity definitions

use serde::{Deserialize, Serialize};

/// Join row recording that a crime occurred at a location.
///
/// Both references must point at existing rows; the schema cascades
/// this row away when either parent is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeLocation {
    pub id: i64,
    pub crime_id: i64,
    pub location_id: i64,
}

/// Request for linking a crime to a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCrimeLocationRequest {
    pub crime_id: i64,
    pub location_id: i64,
}
