//! User repository for database operations.

use crate::entities::{CreateUserRequest, User};
use crate::types::{UserError, UserResult};
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, username, email, password_hash, created_at FROM users WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, username, email, password_hash, created_at FROM users WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, username, email, password_hash, created_at FROM users WHERE email = ?"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    /// Create a new user row.
    ///
    /// No uniqueness pre-check happens here; the UNIQUE constraints on
    /// username and email are the source of truth and violations map to
    /// the typed errors.
    pub async fn create(&self, request: &CreateUserRequest) -> UserResult<User> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, username, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.password_hash)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(UserError::from)?;

        let user_id = result.last_insert_rowid();

        info!(user_id, username = %request.username, "created new user");

        Ok(User {
            id: user_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            username: request.username.clone(),
            email: request.email.clone(),
            password_hash: request.password_hash.clone(),
            created_at: now,
        })
    }

    /// Delete a user; the schema cascades away their saved crimes
    pub async fn delete(&self, id: i64) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        info!(user_id = id, "deleted user");
        Ok(())
    }

    /// Get user count
    pub async fn count(&self) -> UserResult<i64> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(count.unwrap_or(0))
    }
}
