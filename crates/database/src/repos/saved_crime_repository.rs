//! Repository for saved-crime bookmark rows.

use crate::entities::{CreateSavedCrimeRequest, CrimeLocation, SavedCrime};
use crate::types::{CatalogError, CatalogResult};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for saved-crime database operations
#[derive(Clone)]
pub struct SavedCrimeRepository {
    pool: SqlitePool,
}

impl SavedCrimeRepository {
    /// Create a new saved-crime repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a bookmark by ID
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<SavedCrime>> {
        let row = sqlx::query(
            "SELECT id, user_id, crime_location_id FROM saved_crimes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| SavedCrime {
            id: row.get("id"),
            user_id: row.get("user_id"),
            crime_location_id: row.get("crime_location_id"),
        }))
    }

    /// Find a user's bookmark of a specific crime-location, if any
    pub async fn find_by_user_and_crime_location(
        &self,
        user_id: i64,
        crime_location_id: i64,
    ) -> CatalogResult<Option<SavedCrime>> {
        let row = sqlx::query(
            "SELECT id, user_id, crime_location_id FROM saved_crimes WHERE user_id = ? AND crime_location_id = ?",
        )
        .bind(user_id)
        .bind(crime_location_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| SavedCrime {
            id: row.get("id"),
            user_id: row.get("user_id"),
            crime_location_id: row.get("crime_location_id"),
        }))
    }

    /// List all of a user's bookmarks
    pub async fn find_by_user(&self, user_id: i64) -> CatalogResult<Vec<SavedCrime>> {
        let rows = sqlx::query(
            "SELECT id, user_id, crime_location_id FROM saved_crimes WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| SavedCrime {
                id: row.get("id"),
                user_id: row.get("user_id"),
                crime_location_id: row.get("crime_location_id"),
            })
            .collect())
    }

    /// Enumerate the crime-location rows a user has bookmarked
    pub async fn saved_crime_locations_for_user(
        &self,
        user_id: i64,
    ) -> CatalogResult<Vec<CrimeLocation>> {
        let rows = sqlx::query(
            "SELECT cl.id, cl.crime_id, cl.location_id
             FROM crime_location cl
             JOIN saved_crimes sc ON sc.crime_location_id = cl.id
             WHERE sc.user_id = ? ORDER BY sc.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CrimeLocation {
                id: row.get("id"),
                crime_id: row.get("crime_id"),
                location_id: row.get("location_id"),
            })
            .collect())
    }

    /// Create a new bookmark; both parents must exist
    pub async fn create(&self, request: &CreateSavedCrimeRequest) -> CatalogResult<SavedCrime> {
        let result = sqlx::query(
            "INSERT INTO saved_crimes (user_id, crime_location_id) VALUES (?, ?)",
        )
        .bind(request.user_id)
        .bind(request.crime_location_id)
        .execute(&self.pool)
        .await
        .map_err(CatalogError::from)?;

        let saved_crime_id = result.last_insert_rowid();

        info!(
            saved_crime_id,
            user_id = request.user_id,
            crime_location_id = request.crime_location_id,
            "saved crime for user"
        );

        Ok(SavedCrime {
            id: saved_crime_id,
            user_id: request.user_id,
            crime_location_id: request.crime_location_id,
        })
    }

    /// Delete a bookmark
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM saved_crimes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::SavedCrimeNotFound);
        }

        info!(saved_crime_id = id, "removed saved crime");
        Ok(())
    }
}
