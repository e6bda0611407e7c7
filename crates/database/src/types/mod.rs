//! Shared types and result types for the database layer

pub mod errors;

// Re-export common types
pub use errors::{CatalogError, DatabaseError, UserError};

// Common result types
pub type DatabaseResult<T> = Result<T, DatabaseError>;
pub type UserResult<T> = Result<T, UserError>;
pub type CatalogResult<T> = Result<T, CatalogError>;

// Re-export request types from entities
pub use crate::entities::{
    CreateCrimeLocationRequest, CreateCrimeRequest, CreateLocationRequest,
    CreateSavedCrimeRequest, CreateUserRequest,
};
