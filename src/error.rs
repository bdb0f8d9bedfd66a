// ❌ Catalog errors
// A lookup by id with no match is the only failure the registries know about.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entity of this kind carries the requested id
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
}

impl CatalogError {
    pub fn brand_not_found(id: &str) -> Self {
        CatalogError::NotFound {
            entity: "Brand",
            id: id.to_string(),
        }
    }

    pub fn car_not_found(id: &str) -> Self {
        CatalogError::NotFound {
            entity: "Car",
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
