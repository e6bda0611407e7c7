//! # Crimemap Catalog Crate
//!
//! Crime catalog navigation and per-user bookmarks: crimes, locations,
//! the crime-location join, and saved crimes, plus the location form
//! placeholder consumed by the request layer.

pub mod forms;
pub mod service;

// Re-export database types used at this crate's boundary
pub use crimemap_database::{
    CatalogError, CatalogResult, Crime, CrimeLocation, Location, SavedCrime,
};

pub use forms::LocationAddForm;
pub use service::CatalogService;
