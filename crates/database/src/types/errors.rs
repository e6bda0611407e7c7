//! Error types for the database layer

use thiserror::Error;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// User-specific database errors
#[derive(Debug, Error, Clone)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Password hashing failed")]
    PasswordHashingFailed,

    #[error("Invalid password hash")]
    InvalidPasswordHash,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Catalog-specific database errors
#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    #[error("Crime not found")]
    CrimeNotFound,

    #[error("Location not found")]
    LocationNotFound,

    #[error("Crime-location link not found")]
    CrimeLocationNotFound,

    #[error("Saved crime not found")]
    SavedCrimeNotFound,

    #[error("Crime already exists")]
    CrimeAlreadyExists,

    #[error("Referenced row does not exist")]
    ForeignKeyViolation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Convert database errors to our error types
impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserError::UserNotFound,
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE constraint failed") {
                    if message.contains("users.email") {
                        UserError::EmailAlreadyExists
                    } else {
                        UserError::UsernameAlreadyExists
                    }
                } else {
                    UserError::DatabaseError(message.to_string())
                }
            }
            _ => UserError::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => CatalogError::CrimeLocationNotFound,
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("FOREIGN KEY constraint failed") {
                    CatalogError::ForeignKeyViolation
                } else if message.contains("UNIQUE constraint failed") {
                    CatalogError::CrimeAlreadyExists
                } else {
                    CatalogError::DatabaseError(message.to_string())
                }
            }
            _ => CatalogError::DatabaseError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let user_err = UserError::UserNotFound;
        assert_eq!(user_err.to_string(), "User not found");

        let catalog_err = CatalogError::ForeignKeyViolation;
        assert_eq!(catalog_err.to_string(), "Referenced row does not exist");
    }
}
