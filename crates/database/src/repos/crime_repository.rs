//! Crime repository for database operations.

use crate::entities::{CreateCrimeRequest, Crime};
use crate::types::{CatalogError, CatalogResult};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for crime catalog database operations
#[derive(Clone)]
pub struct CrimeRepository {
    pool: SqlitePool,
}

impl CrimeRepository {
    /// Create a new crime repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find crime by ID
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Crime>> {
        let row = sqlx::query("SELECT id, crime_name FROM crimes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| Crime {
            id: row.get("id"),
            crime_name: row.get("crime_name"),
        }))
    }

    /// Find crime by its unique name
    pub async fn find_by_name(&self, crime_name: &str) -> CatalogResult<Option<Crime>> {
        let row = sqlx::query("SELECT id, crime_name FROM crimes WHERE crime_name = ?")
            .bind(crime_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| Crime {
            id: row.get("id"),
            crime_name: row.get("crime_name"),
        }))
    }

    /// List all crimes in the catalog
    pub async fn list(&self) -> CatalogResult<Vec<Crime>> {
        let rows = sqlx::query("SELECT id, crime_name FROM crimes ORDER BY crime_name")
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

    /// Create a new crime catalog entry
    pub async fn create(&self, request: &CreateCrimeRequest) -> CatalogResult<Crime> {
        let result = sqlx::query("INSERT INTO crimes (crime_name) VALUES (?)")
            .bind(&request.crime_name)
            .execute(&self.pool)
            .await
            .map_err(CatalogError::from)?;

        let crime_id = result.last_insert_rowid();

        info!(crime_id, crime_name = %request.crime_name, "created crime catalog entry");

        Ok(Crime {
            id: crime_id,
            crime_name: request.crime_name.clone(),
        })
    }

    /// Delete a crime; cascades through crime_location into saved_crimes
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM crimes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::CrimeNotFound);
        }

        info!(crime_id = id, "deleted crime catalog entry");
        Ok(())
    }
}
