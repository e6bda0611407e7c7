//! User service for signup and authentication.

use crimemap_database::{CreateUserRequest, User, UserError, UserRepository, UserResult};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::password::CredentialHasher;

/// Input for [`UserService::signup`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Service for user account operations.
///
/// Owns a repository and a credential hasher, both injected at
/// construction; lifecycle belongs to the application startup, not to
/// module-level state.
pub struct UserService {
    repository: UserRepository,
    hasher: CredentialHasher,
}

impl UserService {
    /// Create a service over a connection pool with the default hasher
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: UserRepository::new(pool),
            hasher: CredentialHasher::new(),
        }
    }

    /// Create a service from explicit parts
    pub fn with_parts(repository: UserRepository, hasher: CredentialHasher) -> Self {
        Self { repository, hasher }
    }

    /// Sign up a new user.
    ///
    /// Empty username, email, or password fails validation before any
    /// persistence attempt. Uniqueness is not pre-checked here; a
    /// duplicate username or email surfaces as the repository's
    /// constraint error, unmodified.
    pub async fn signup(&self, request: SignupRequest) -> UserResult<User> {
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(UserError::ValidationFailed(
                "Username, email, and password are required fields".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = self
            .repository
            .create(&CreateUserRequest {
                first_name: request.first_name,
                last_name: request.last_name,
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "user signed up");
        Ok(user)
    }

    /// Authenticate a user by username and password.
    ///
    /// `Ok(None)` is the sentinel for both "no such user" and "wrong
    /// password"; callers cannot distinguish the two, which keeps
    /// username enumeration off the table. Only infrastructure
    /// failures produce `Err`.
    pub async fn authenticate(&self, username: &str, password: &str) -> UserResult<Option<User>> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            warn!(username, "authentication failed");
            return Ok(None);
        };

        if self.hasher.verify(password, &user.password_hash)? {
            info!(user_id = user.id, username = %user.username, "user authenticated");
            Ok(Some(user))
        } else {
            warn!(username, "authentication failed");
            Ok(None)
        }
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository.find_by_email(email).await
    }
}
