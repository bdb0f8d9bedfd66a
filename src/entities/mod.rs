// Entity Models
//
// Each entity has:
// - Stable identity (UUID) generated on creation, never changed
// - A registry holding the insertion-ordered sequence in memory

use serde::{Deserialize, Serialize};

pub mod brand;
pub mod car;

pub use brand::{Brand, BrandRegistry, CreateBrand, UpdateBrand};
pub use car::{Car, CarRegistry, CreateCar, UpdateCar};

/// Body returned after a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new(entity: &str, id: &str) -> Self {
        DeleteConfirmation {
            message: format!("{} with id {} deleted", entity, id),
        }
    }
}
