//! Crimemap Database Crate
//!
//! This crate provides the persistence layer for the Crimemap application:
//! connection management, embedded migrations, entity definitions, and
//! repository implementations over SQLite.

use sqlx::SqlitePool;

use crimemap_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::{prepare_database, DatabaseConnection};
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::{
    CrimeLocationRepository, CrimeRepository, LocationRepository, SavedCrimeRepository,
    UserRepository,
};

// Re-export entities
pub use entities::{
    crime::{CreateCrimeRequest, Crime},
    crime_location::{CreateCrimeLocationRequest, CrimeLocation},
    location::{CreateLocationRequest, Location},
    saved_crime::{CreateSavedCrimeRequest, SavedCrime},
    user::{CreateUserRequest, User},
};

// Re-export types
pub use types::{
    errors::{CatalogError, DatabaseError, UserError},
    CatalogResult, DatabaseResult, UserResult,
};

/// Re-export commonly used types for convenience
pub use sqlx::Pool;

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
