// 🚗 Car Entity - brand + model pairs
//
// `brand` is free text. It is never checked against the brand registry.

use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::DeleteConfirmation;
use crate::error::{CatalogError, Result};

// ============================================================================
// CAR ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Stable identity (UUID v4)
    pub id: String,
    pub brand: String,
    pub model: String,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Car {
            id: uuid::Uuid::new_v4().to_string(),
            brand: brand.into(),
            model: model.into(),
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCar {
    pub brand: String,
    pub model: String,
}

/// Partial car update. `id` is accepted in the body but never re-keys a car:
/// the id the update was addressed to always wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

// ============================================================================
// CAR REGISTRY
// ============================================================================

/// In-memory, insertion-ordered store of cars
pub struct CarRegistry {
    cars: RwLock<Vec<Car>>,
}

impl CarRegistry {
    /// Create registry with the three bootstrap cars
    pub fn new() -> Self {
        Self::with_cars(vec![
            Car::new("Toyota", "Corolla"),
            Car::new("Honda", "Civic"),
            Car::new("Jeep", "Cherokee"),
        ])
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        CarRegistry {
            cars: RwLock::new(cars),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Car>> {
        self.cars.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Car>> {
        self.cars.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn find_all(&self) -> Vec<Car> {
        self.read().clone()
    }

    pub fn find_one_by_id(&self, id: &str) -> Result<Car> {
        self.read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::car_not_found(id))
    }

    pub fn create(&self, dto: CreateCar) -> Car {
        let car = Car::new(dto.brand, dto.model);
        tracing::debug!(id = %car.id, brand = %car.brand, model = %car.model, "car created");

        self.write().push(car.clone());
        car
    }

    /// Merge the provided fields over the stored car
    pub fn update(&self, id: &str, dto: UpdateCar) -> Result<Car> {
        let mut cars = self.write();

        let slot = cars
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::car_not_found(id))?;

        if let Some(brand) = dto.brand {
            slot.brand = brand;
        }
        if let Some(model) = dto.model {
            slot.model = model;
        }

        tracing::debug!(id, brand = %slot.brand, model = %slot.model, "car updated");
        Ok(slot.clone())
    }

    pub fn delete(&self, id: &str) -> Result<DeleteConfirmation> {
        let mut cars = self.write();

        if !cars.iter().any(|c| c.id == id) {
            return Err(CatalogError::car_not_found(id));
        }
        cars.retain(|c| c.id != id);

        tracing::debug!(id, "car deleted");
        Ok(DeleteConfirmation::new("Car", id))
    }

    /// Discard every car and store `cars` verbatim
    pub fn replace_all(&self, cars: Vec<Car>) {
        let mut current = self.write();
        tracing::debug!(previous = current.len(), next = cars.len(), "cars replaced");
        *current = cars;
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for CarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
