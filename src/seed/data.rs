// 🌱 Seed data
//
// Ids are generated when these functions run, so every process start gets
// a fresh set.

use crate::entities::{Brand, Car};

pub fn cars_seed() -> Vec<Car> {
    vec![
        Car::new("Toyota", "Prado"),
        Car::new("Honda", "Civic"),
        Car::new("Hyundai", "Elantra"),
    ]
}

/// Names are stored lowercased, the same as brands created through the API
pub fn brands_seed() -> Vec<Brand> {
    ["volvo", "toyota", "honda", "jeep", "tesla"]
        .into_iter()
        .map(Brand::new)
        .collect()
}
