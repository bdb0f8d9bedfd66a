// 🏷️ Brand Entity - names of car makers
//
// Names are lowercased when a brand is created through the registry.
// Updates store the name exactly as given, and the bootstrap entry keeps
// its display case ("Toyota"). Both quirks are kept on purpose.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::DeleteConfirmation;
use crate::error::{CatalogError, Result};

// ============================================================================
// BRAND ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Stable identity (UUID v4)
    pub id: String,

    pub name: String,

    /// Epoch milliseconds
    pub created_at: i64,

    /// Epoch milliseconds, only set once the brand has been updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Brand {
    /// Build a brand with a fresh id, keeping `name` as given
    pub fn new(name: impl Into<String>) -> Self {
        Brand {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
            updated_at: None,
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBrand {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBrand {
    pub name: Option<String>,
}

// ============================================================================
// BRAND REGISTRY
// ============================================================================

/// In-memory, insertion-ordered store of brands
pub struct BrandRegistry {
    brands: RwLock<Vec<Brand>>,
}

impl BrandRegistry {
    /// Create registry with the bootstrap brand
    pub fn new() -> Self {
        Self::with_brands(vec![Brand::new("Toyota")])
    }

    pub fn with_brands(brands: Vec<Brand>) -> Self {
        BrandRegistry {
            brands: RwLock::new(brands),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Brand>> {
        self.brands.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Brand>> {
        self.brands.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, dto: CreateBrand) -> Brand {
        let brand = Brand::new(dto.name.to_lowercase());
        tracing::debug!(id = %brand.id, name = %brand.name, "brand created");

        self.write().push(brand.clone());
        brand
    }

    /// All brands in insertion order
    pub fn find_all(&self) -> Vec<Brand> {
        self.read().clone()
    }

    pub fn find_one(&self, id: &str) -> Result<Brand> {
        self.read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::brand_not_found(id))
    }

    /// Replace the brand's name and stamp `updated_at`; all other fields are kept
    pub fn update(&self, id: &str, dto: UpdateBrand) -> Result<Brand> {
        let mut brands = self.write();

        let slot = brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CatalogError::brand_not_found(id))?;

        let updated = Brand {
            id: id.to_string(),
            name: dto.name.unwrap_or_else(|| slot.name.clone()),
            created_at: slot.created_at,
            updated_at: Some(Utc::now().timestamp_millis()),
        };
        *slot = updated.clone();

        tracing::debug!(id, name = %updated.name, "brand updated");
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> Result<DeleteConfirmation> {
        let mut brands = self.write();

        if !brands.iter().any(|b| b.id == id) {
            return Err(CatalogError::brand_not_found(id));
        }
        brands.retain(|b| b.id != id);

        tracing::debug!(id, "brand removed");
        Ok(DeleteConfirmation::new("Brand", id))
    }

    /// Discard every brand and store `brands` verbatim
    pub fn replace_all(&self, brands: Vec<Brand>) {
        let mut current = self.write();
        tracing::debug!(previous = current.len(), next = brands.len(), "brands replaced");
        *current = brands;
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for BrandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
