//! Domain entities for the database layer
//!
//! Plain data structs consumed by the repository layer; no ORM base
//! types and no live object-graph back-references. Relationship
//! navigation happens through repository queries.

pub mod crime;
pub mod crime_location;
pub mod location;
pub mod saved_crime;
pub mod user;

// Re-export all entity types
pub use crime::{CreateCrimeRequest, Crime};
pub use crime_location::{CreateCrimeLocationRequest, CrimeLocation};
pub use location::{CreateLocationRequest, Location};
pub use saved_crime::{CreateSavedCrimeRequest, SavedCrime};
pub use user::{CreateUserRequest, User};
