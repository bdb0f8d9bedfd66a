// 🌱 Seed Coordinator - reset both registries to a known state
//
// Seeding is destructive: whatever was created or updated before is lost.

pub mod data;

use std::sync::Arc;

use crate::entities::{Brand, BrandRegistry, Car, CarRegistry};

pub const SEED_SUCCESS: &str = "SEED execute successfully";

pub struct SeedCoordinator {
    cars: Arc<CarRegistry>,
    brands: Arc<BrandRegistry>,

    // Built once, so repeated seeds within a process reuse the same ids
    cars_seed: Vec<Car>,
    brands_seed: Vec<Brand>,
}

impl SeedCoordinator {
    pub fn new(cars: Arc<CarRegistry>, brands: Arc<BrandRegistry>) -> Self {
        Self::with_seed(cars, brands, data::cars_seed(), data::brands_seed())
    }

    pub fn with_seed(
        cars: Arc<CarRegistry>,
        brands: Arc<BrandRegistry>,
        cars_seed: Vec<Car>,
        brands_seed: Vec<Brand>,
    ) -> Self {
        SeedCoordinator {
            cars,
            brands,
            cars_seed,
            brands_seed,
        }
    }

    /// Replace the contents of both registries with the seed data
    pub fn populate_db(&self) -> &'static str {
        self.cars.replace_all(self.cars_seed.clone());
        self.brands.replace_all(self.brands_seed.clone());

        tracing::info!(
            cars = self.cars_seed.len(),
            brands = self.brands_seed.len(),
            "registries seeded"
        );
        SEED_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CreateBrand, CreateCar};

    fn coordinator() -> (SeedCoordinator, Arc<CarRegistry>, Arc<BrandRegistry>) {
        let cars = Arc::new(CarRegistry::new());
        let brands = Arc::new(BrandRegistry::new());
        let seed = SeedCoordinator::new(Arc::clone(&cars), Arc::clone(&brands));
        (seed, cars, brands)
    }

    #[test]
    fn test_populate_db_replaces_cars() {
        let (seed, cars, _) = coordinator();
        cars.create(CreateCar {
            brand: "Lada".to_string(),
            model: "Niva".to_string(),
        });

        assert_eq!(seed.populate_db(), "SEED execute successfully");

        let pairs: Vec<(String, String)> = cars
            .find_all()
            .into_iter()
            .map(|c| (c.brand, c.model))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Toyota".to_string(), "Prado".to_string()),
                ("Honda".to_string(), "Civic".to_string()),
                ("Hyundai".to_string(), "Elantra".to_string()),
            ]
        );
    }

    #[test]
    fn test_populate_db_replaces_brands() {
        let (seed, _, brands) = coordinator();
        brands.create(CreateBrand {
            name: "BMW".to_string(),
        });

        seed.populate_db();

        let names: Vec<String> = brands.find_all().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["volvo", "toyota", "honda", "jeep", "tesla"]);
        assert!(brands.find_all().iter().all(|b| b.updated_at.is_none()));
    }

    #[test]
    fn test_repeated_seed_reuses_ids() {
        let (seed, cars, _) = coordinator();

        seed.populate_db();
        let first: Vec<String> = cars.find_all().into_iter().map(|c| c.id).collect();

        cars.delete(&first[0]).unwrap();
        seed.populate_db();
        let second: Vec<String> = cars.find_all().into_iter().map(|c| c.id).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<String> = data::cars_seed().into_iter().map(|c| c.id).collect();
        ids.extend(data::brands_seed().into_iter().map(|b| b.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_populate_db_with_fixed_seed() {
        let cars = Arc::new(CarRegistry::new());
        let brands = Arc::new(BrandRegistry::new());
        let fixed_cars = vec![Car::new("Kia", "Rio")];
        let fixed_brands = vec![Brand::new("kia"), Brand::new("seat")];
        let seed = SeedCoordinator::with_seed(
            Arc::clone(&cars),
            Arc::clone(&brands),
            fixed_cars.clone(),
            fixed_brands.clone(),
        );

        assert_eq!(seed.populate_db(), SEED_SUCCESS);

        assert_eq!(cars.find_all(), fixed_cars);
        assert_eq!(brands.find_all(), fixed_brands);
    }
}
