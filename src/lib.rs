// Cars Catalog - Core Library
// Exposes the registries, seeding and the HTTP API for the server binary and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod seed;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::{CarWriteMode, ServerConfig};
pub use entities::{
    Brand, BrandRegistry, Car, CarRegistry, CreateBrand, CreateCar, DeleteConfirmation,
    UpdateBrand, UpdateCar,
};
pub use error::{CatalogError, Result};
pub use seed::{SeedCoordinator, SEED_SUCCESS};

#[cfg(feature = "server")]
pub use api::{build_router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
