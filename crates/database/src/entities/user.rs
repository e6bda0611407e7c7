//! User entity definitions

use serde::{Deserialize, Serialize};

/// User entity representing an account in the system.
///
/// The `password_hash` field only ever carries the salted argon2 hash
/// produced at signup; plaintext never reaches this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

/// Request for creating a new user.
///
/// Carries the already-hashed password; hashing happens in the service
/// layer before the request reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
