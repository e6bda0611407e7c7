//! Form contract for location-lookup input.

use serde::{Deserialize, Serialize};

/// Form for checking the location on crime data.
///
/// Declares no fields and no validators yet; any input is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationAddForm {}

impl LocationAddForm {
    pub fn validate(&self) -> Result<(), ()> {
        Ok(())
    }
}
