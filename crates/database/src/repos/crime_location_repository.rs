//! Repository for crime-location join rows.

use crate::entities::{CreateCrimeLocationRequest, Crime, CrimeLocation, Location};
use crate::types::{CatalogError, CatalogResult};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for crime-location database operations
#[derive(Clone)]
pub struct CrimeLocationRepository {
    pool: SqlitePool,
}

impl CrimeLocationRepository {
    /// Create a new crime-location repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a join row by ID
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<CrimeLocation>> {
        let row = sqlx::query(
            "SELECT id, crime_id, location_id FROM crime_location WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if let Some(row) = row {
            Ok(Some(CrimeLocation {
                id: row.try_get("id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
                crime_id: row.try_get("crime_id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
                location_id: row.try_get("location_id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Find the join row for a specific crime/location pair
    pub async fn find_by_crime_and_location(
        &self,
        crime_id: i64,
        location_id: i64,
    ) -> CatalogResult<Option<CrimeLocation>> {
        let row = sqlx::query(
            "SELECT id, crime_id, location_id FROM crime_location WHERE crime_id = ? AND location_id = ?",
        )
        .bind(crime_id)
        .bind(location_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if let Some(row) = row {
            Ok(Some(CrimeLocation {
                id: row.try_get("id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
                crime_id: row.try_get("crime_id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
                location_id: row.try_get("location_id").map_err(|e| CatalogError::DatabaseError(e.to_string()))?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Enumerate the locations a crime occurred at
    pub async fn locations_for_crime(&self, crime_id: i64) -> CatalogResult<Vec<Location>> {
        let rows = sqlx::query(
            "SELECT l.id, l.latitude, l.longitude
             FROM locations l
             JOIN crime_location cl ON cl.location_id = l.id
             WHERE cl.crime_id = ? ORDER BY l.id",
        )
        .bind(crime_id)
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

    /// Enumerate the crimes recorded at a location
    pub async fn crimes_for_location(&self, location_id: i64) -> CatalogResult<Vec<Crime>> {
        let rows = sqlx::query(
            "SELECT c.id, c.crime_name
             FROM crimes c
             JOIN crime_location cl ON cl.crime_id = c.id
             WHERE cl.location_id = ? ORDER BY c.crime_name",
        )
        .bind(location_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| Crime {
                id: row.get("id"),
                crime_name: row.get("crime_name"),
            })
            .collect())
    }

    /// Create a new crime-location link.
    ///
    /// Both parents must exist; a dangling reference surfaces as the
    /// foreign-key error from the constraint, not from a pre-check.
    pub async fn create(
        &self,
        request: &CreateCrimeLocationRequest,
    ) -> CatalogResult<CrimeLocation> {
        let result = sqlx::query(
            "INSERT INTO crime_location (crime_id, location_id) VALUES (?, ?)",
        )
        .bind(request.crime_id)
        .bind(request.location_id)
        .execute(&self.pool)
        .await
        .map_err(CatalogError::from)?;

        let crime_location_id = result.last_insert_rowid();

        info!(
            crime_location_id,
            crime_id = request.crime_id,
            location_id = request.location_id,
            "linked crime to location"
        );

        Ok(CrimeLocation {
            id: crime_location_id,
            crime_id: request.crime_id,
            location_id: request.location_id,
        })
    }

    /// Delete a join row; cascades away saved_crimes referencing it
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM crime_location WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::CrimeLocationNotFound);
        }

        info!(crime_location_id = id, "deleted crime-location link");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::prepare_database;
    use crate::entities::{CreateCrimeRequest, CreateLocationRequest};
    use crate::migrations::run_migrations;
    use crate::repos::{CrimeRepository, LocationRepository};
    use crimemap_config::DatabaseConfig;
    use tempfile::TempDir;

    async fn create_test_pool() -> (SqlitePool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());

        let config = DatabaseConfig {
            url: db_url,
            max_connections: 1,
        };

        let pool = prepare_database(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool, temp_dir)
    }

    async fn seed_crime_and_location(pool: &SqlitePool) -> (Crime, Location) {
        let crime = CrimeRepository::new(pool.clone())
            .create(&CreateCrimeRequest {
                crime_name: "Robbery".to_string(),
            })
            .await
            .unwrap();
        let location = LocationRepository::new(pool.clone())
            .create(&CreateLocationRequest {
                latitude: 40.7128,
                longitude: -74.0060,
            })
            .await
            .unwrap();
        (crime, location)
    }

    #[tokio::test]
    async fn test_link_and_navigate_both_directions() {
        let (pool, _temp_dir) = create_test_pool().await;
        let (crime, location) = seed_crime_and_location(&pool).await;
        let repo = CrimeLocationRepository::new(pool);

        let link = repo
            .create(&CreateCrimeLocationRequest {
                crime_id: crime.id,
                location_id: location.id,
            })
            .await
            .unwrap();

        let locations = repo.locations_for_crime(crime.id).await.unwrap();
        assert_eq!(locations, vec![location.clone()]);

        let crimes = repo.crimes_for_location(location.id).await.unwrap();
        assert_eq!(crimes, vec![crime.clone()]);

        let found = repo
            .find_by_crime_and_location(crime.id, location.id)
            .await
            .unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn test_dangling_reference_is_foreign_key_violation() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = CrimeLocationRepository::new(pool);

        let err = repo
            .create(&CreateCrimeLocationRequest {
                crime_id: 999,
                location_id: 999,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ForeignKeyViolation));
    }

    #[tokio::test]
    async fn test_deleting_crime_cascades_to_links() {
        let (pool, _temp_dir) = create_test_pool().await;
        let (crime, location) = seed_crime_and_location(&pool).await;
        let repo = CrimeLocationRepository::new(pool.clone());

        let link = repo
            .create(&CreateCrimeLocationRequest {
                crime_id: crime.id,
                location_id: location.id,
            })
            .await
            .unwrap();

        CrimeRepository::new(pool).delete(crime.id).await.unwrap();

        assert!(repo.find_by_id(link.id).await.unwrap().is_none());
    }
}
