//! Catalog service over the crime, location, and bookmark repositories.

use crimemap_database::{
    CatalogResult, CreateCrimeLocationRequest, CreateCrimeRequest, CreateLocationRequest,
    CreateSavedCrimeRequest, Crime, CrimeLocation, CrimeLocationRepository, CrimeRepository,
    Location, LocationRepository, SavedCrime, SavedCrimeRepository,
};
use sqlx::SqlitePool;
use tracing::info;

/// Navigation layer over the crime catalog and per-user bookmarks.
///
/// Thin by design: every method is one or two repository calls, and
/// referential integrity stays with the schema's constraints.
pub struct CatalogService {
    crimes: CrimeRepository,
    locations: LocationRepository,
    crime_locations: CrimeLocationRepository,
    saved_crimes: SavedCrimeRepository,
}

impl CatalogService {
    /// Create a catalog service over a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            crimes: CrimeRepository::new(pool.clone()),
            locations: LocationRepository::new(pool.clone()),
            crime_locations: CrimeLocationRepository::new(pool.clone()),
            saved_crimes: SavedCrimeRepository::new(pool),
        }
    }

    /// Add a crime category to the catalog
    pub async fn add_crime(&self, crime_name: &str) -> CatalogResult<Crime> {
        self.crimes
            .create(&CreateCrimeRequest {
                crime_name: crime_name.to_string(),
            })
            .await
    }

    /// Add a location to the catalog
    pub async fn add_location(&self, latitude: f64, longitude: f64) -> CatalogResult<Location> {
        self.locations
            .create(&CreateLocationRequest {
                latitude,
                longitude,
            })
            .await
    }

    /// Record that a crime occurred at a location
    pub async fn record_crime_at(
        &self,
        crime_id: i64,
        location_id: i64,
    ) -> CatalogResult<CrimeLocation> {
        self.crime_locations
            .create(&CreateCrimeLocationRequest {
                crime_id,
                location_id,
            })
            .await
    }

    /// All locations where a crime was recorded
    pub async fn locations_for_crime(&self, crime_id: i64) -> CatalogResult<Vec<Location>> {
        self.crime_locations.locations_for_crime(crime_id).await
    }

    /// All crimes recorded at a location
    pub async fn crimes_for_location(&self, location_id: i64) -> CatalogResult<Vec<Crime>> {
        self.crime_locations.crimes_for_location(location_id).await
    }

    /// List the whole crime catalog
    pub async fn list_crimes(&self) -> CatalogResult<Vec<Crime>> {
        self.crimes.list().await
    }

    /// List all known locations
    pub async fn list_locations(&self) -> CatalogResult<Vec<Location>> {
        self.locations.list().await
    }

    /// Bookmark a crime-location for a user.
    ///
    /// Re-saving an already-bookmarked crime-location returns the
    /// existing row instead of inserting a duplicate.
    pub async fn save_for_user(
        &self,
        user_id: i64,
        crime_location_id: i64,
    ) -> CatalogResult<SavedCrime> {
        if let Some(existing) = self
            .saved_crimes
            .find_by_user_and_crime_location(user_id, crime_location_id)
            .await?
        {
            info!(user_id, crime_location_id, "crime already saved for user");
            return Ok(existing);
        }

        self.saved_crimes
            .create(&CreateSavedCrimeRequest {
                user_id,
                crime_location_id,
            })
            .await
    }

    /// Remove a user's bookmark
    pub async fn unsave(&self, saved_crime_id: i64) -> CatalogResult<()> {
        self.saved_crimes.delete(saved_crime_id).await
    }

    /// A user's bookmarks
    pub async fn saved_for_user(&self, user_id: i64) -> CatalogResult<Vec<SavedCrime>> {
        self.saved_crimes.find_by_user(user_id).await
    }

    /// The crime-location rows a user has bookmarked
    pub async fn saved_crime_locations_for_user(
        &self,
        user_id: i64,
    ) -> CatalogResult<Vec<CrimeLocation>> {
        self.saved_crimes
            .saved_crime_locations_for_user(user_id)
            .await
    }

    /// Delete a crime; its links and any bookmarks of them cascade away
    pub async fn delete_crime(&self, crime_id: i64) -> CatalogResult<()> {
        self.crimes.delete(crime_id).await
    }

    /// Delete a location; its links and any bookmarks of them cascade away
    pub async fn delete_location(&self, location_id: i64) -> CatalogResult<()> {
        self.locations.delete(location_id).await
    }
}
