//! Database repository implementations

pub mod crime_location_repository;
pub mod crime_repository;
pub mod location_repository;
pub mod saved_crime_repository;
pub mod user_repository;

// Re-export all repositories for convenience
pub use crime_location_repository::*;
pub use crime_repository::*;
pub use location_repository::*;
pub use saved_crime_repository::*;
pub use user_repository::*;
