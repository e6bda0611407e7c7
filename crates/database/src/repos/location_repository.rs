//! Location repository for database operations.

use crate::entities::{CreateLocationRequest, Location};
use crate::types::{CatalogError, CatalogResult};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for location database operations
#[derive(Clone)]
pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    /// Create a new location repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find location by ID
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Location>> {
        let row = sqlx::query("SELECT id, latitude, longitude FROM locations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| Location {
            id: row.get("id"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
        }))
    }

    /// List all locations
    pub async fn list(&self) -> CatalogResult<Vec<Location>> {
        let rows = sqlx::query("SELECT id, latitude, longitude FROM locations ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| Location {
                id: row.get("id"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
            })
            .collect())
    }

    /// Create a new location
    pub async fn create(&self, request: &CreateLocationRequest) -> CatalogResult<Location> {
        let result = sqlx::query("INSERT INTO locations (latitude, longitude) VALUES (?, ?)")
            .bind(request.latitude)
            .bind(request.longitude)
            .execute(&self.pool)
            .await
            .map_err(CatalogError::from)?;

        let location_id = result.last_insert_rowid();

        info!(
            location_id,
            latitude = request.latitude,
            longitude = request.longitude,
            "created location"
        );

        Ok(Location {
            id: location_id,
            latitude: request.latitude,
            longitude: request.longitude,
        })
    }

    /// Delete a location; cascades through crime_location into saved_crimes
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::LocationNotFound);
        }

        info!(location_id = id, "deleted location");
        Ok(())
    }
}
