//! In-memory Vehicle Repository Implementation
//!
//! This module implements the `VehicleRepository` port over a `HashMap`
//! living for the lifetime of the process.

use std::collections::HashSet;
use std::future::Future;
use std::ops::RangeInclusive;
use std::sync::Arc;

use fleetlink_domain::{
    ports::{VehicleMap, VehicleRepository},
    vehicle::{RepositoryError, Vehicle, VehicleId},
};
use tokio::sync::RwLock;
use tracing::{debug, debug_span, info, warn, Instrument};

/// In-memory implementation of the VehicleRepository port
///
/// Every operation takes the collection lock exactly once, so each call is
/// atomic with respect to the others. tokio's `RwLock` queues waiters
/// fairly: once a writer is waiting, later readers wait behind it.
///
/// Cloning the repository yields another handle onto the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<VehicleMap>>,
}

impl InMemoryVehicleRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with an existing collection
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetlink_domain::ports::VehicleMap;
    /// use fleetlink_memory::InMemoryVehicleRepository;
    ///
    /// let repo = InMemoryVehicleRepository::with_vehicles(VehicleMap::new());
    /// ```
    pub fn with_vehicles(vehicles: VehicleMap) -> Self {
        info!(count = vehicles.len(), "Initializing InMemoryVehicleRepository");
        Self {
            vehicles: Arc::new(RwLock::new(vehicles)),
        }
    }

    /// Number of stored vehicles
    pub async fn len(&self) -> usize {
        self.vehicles.read().await.len()
    }

    /// Whether the collection is empty
    pub async fn is_empty(&self) -> bool {
        self.vehicles.read().await.is_empty()
    }
}

/// Copy out every vehicle satisfying `pred`
fn matching(vehicles: &VehicleMap, pred: impl Fn(&Vehicle) -> bool) -> VehicleMap {
    vehicles
        .iter()
        .filter(|(_, vehicle)| pred(vehicle))
        .map(|(id, vehicle)| (*id, vehicle.clone()))
        .collect()
}

fn non_empty(found: VehicleMap) -> Result<VehicleMap, RepositoryError> {
    if found.is_empty() {
        Err(RepositoryError::NotFound)
    } else {
        Ok(found)
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn find_all(&self) -> impl Future<Output = VehicleMap> + Send {
        let vehicles = Arc::clone(&self.vehicles);

        async move {
            let found = vehicles.read().await.clone();
            debug!(count = found.len(), "Listed all vehicles");
            found
        }
    }

    fn save(
        &self,
        vehicle: Vehicle,
    ) -> impl Future<Output = Result<Vehicle, RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let span = debug_span!("save", id = %vehicle.id);

        async move {
            let mut guard = vehicles.write().await;

            if guard.contains_key(&vehicle.id) {
                warn!("Rejected vehicle with existing id");
                return Err(RepositoryError::DuplicateKey(vehicle.id));
            }

            guard.insert(vehicle.id, vehicle.clone());
            info!("Saved vehicle");
            Ok(vehicle)
        }
        .instrument(span)
    }

    fn bulk_save(
        &self,
        batch: Vec<Vehicle>,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let span = debug_span!("bulk_save", size = batch.len());

        async move {
            let mut guard = vehicles.write().await;

            // Check the whole batch before inserting anything
            let mut seen = HashSet::with_capacity(batch.len());
            for vehicle in &batch {
                if guard.contains_key(&vehicle.id) || !seen.insert(vehicle.id) {
                    warn!(id = %vehicle.id, "Rejected batch on duplicate id");
                    return Err(RepositoryError::DuplicateKey(vehicle.id));
                }
            }

            let count = batch.len();
            guard.extend(batch.into_iter().map(|vehicle| (vehicle.id, vehicle)));
            info!(count, "Saved vehicle batch");
            Ok(())
        }
        .instrument(span)
    }

    fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> impl Future<Output = Result<VehicleMap, RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let color = color.to_owned();

        async move {
            let found = matching(&*vehicles.read().await, |v| {
                v.color_matches(&color) && v.fabrication_year == year
            });
            debug!(color = %color, year, count = found.len(), "Searched by color and year");
            non_empty(found)
        }
    }

    fn find_by_brand_and_years(
        &self,
        brand: &str,
        from: i32,
        to: i32,
    ) -> impl Future<Output = Result<VehicleMap, RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let brand = brand.to_owned();

        async move {
            let years = from..=to;
            let found = matching(&*vehicles.read().await, |v| {
                v.brand_matches(&brand) && years.contains(&v.fabrication_year)
            });
            debug!(brand = %brand, from, to, count = found.len(), "Searched by brand and years");
            non_empty(found)
        }
    }

    fn average_speed_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<f64, RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let brand = brand.to_owned();

        async move {
            let guard = vehicles.read().await;
            let (total, count) = guard
                .values()
                .filter(|v| v.brand_matches(&brand))
                .fold((0.0, 0usize), |(total, count), v| (total + v.max_speed, count + 1));
            drop(guard);

            if count == 0 {
                debug!(brand = %brand, "No vehicles for brand");
                return Err(RepositoryError::BrandNotFound(brand));
            }
            Ok(total / count as f64)
        }
    }

    fn update_speed(
        &self,
        id: VehicleId,
        new_speed: f64,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let span = debug_span!("update_speed", id = %id);

        async move {
            match vehicles.write().await.get_mut(&id) {
                Some(vehicle) => {
                    vehicle.max_speed = new_speed;
                    info!(new_speed, "Updated vehicle speed");
                    Ok(())
                }
                None => {
                    warn!("Speed update for unknown vehicle");
                    Err(RepositoryError::NotFound)
                }
            }
        }
        .instrument(span)
    }

    fn delete(&self, id: VehicleId) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let vehicles = Arc::clone(&self.vehicles);
        let span = debug_span!("delete", id = %id);

        async move {
            if vehicles.write().await.remove(&id).is_none() {
                warn!("Delete of unknown vehicle");
                return Err(RepositoryError::NotFound);
            }
            info!("Deleted vehicle");
            Ok(())
        }
        .instrument(span)
    }

    fn find_by_dimensions(
        &self,
        length: RangeInclusive<f64>,
        width: RangeInclusive<f64>,
    ) -> impl Future<Output = VehicleMap> + Send {
        let vehicles = Arc::clone(&self.vehicles);

        async move {
            let found = matching(&*vehicles.read().await, |v| {
                length.contains(&v.dimensions.length) && width.contains(&v.dimensions.width)
            });
            debug!(?length, ?width, count = found.len(), "Searched by dimensions");
            found
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetlink_domain::vehicle::Dimensions;

    fn vehicle(id: i64, brand: &str, color: &str, year: i32) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            brand: brand.to_string(),
            model: "Model".to_string(),
            registration: format!("REG-{}", id),
            color: color.to_string(),
            fabrication_year: year,
            capacity: 5,
            max_speed: 180.0,
            fuel_type: "diesel".to_string(),
            transmission: "automatic".to_string(),
            weight: 1500.0,
            dimensions: Dimensions {
                height: 1.5,
                length: 4.5,
                width: 1.8,
            },
        }
    }

    fn sized(id: i64, length: f64, width: f64) -> Vehicle {
        let mut v = vehicle(id, "Ford", "red", 2015);
        v.dimensions.length = length;
        v.dimensions.width = width;
        v
    }

    fn repo_with(vehicles: Vec<Vehicle>) -> InMemoryVehicleRepository {
        InMemoryVehicleRepository::with_vehicles(
            vehicles.into_iter().map(|v| (v.id, v)).collect(),
        )
    }

    #[tokio::test]
    async fn test_find_all_on_empty_repository() {
        let repo = InMemoryVehicleRepository::new();
        assert!(repo.find_all().await.is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_returned_copies_do_not_alias_storage() {
        let repo = repo_with(vec![vehicle(1, "Ford", "red", 2015)]);

        let mut copy = repo.find_all().await;
        copy.get_mut(&VehicleId::new(1)).unwrap().max_speed = 1.0;
        copy.clear();

        let stored = repo.find_all().await;
        assert_eq!(stored[&VehicleId::new(1)].max_speed, 180.0);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate() {
        let repo = InMemoryVehicleRepository::new();
        repo.save(vehicle(1, "Ford", "red", 2015)).await.unwrap();

        let result = repo.save(vehicle(1, "Opel", "blue", 2001)).await;

        assert_eq!(result, Err(RepositoryError::DuplicateKey(VehicleId::new(1))));
        assert_eq!(repo.find_all().await[&VehicleId::new(1)].brand, "Ford");
    }

    #[tokio::test]
    async fn test_bulk_save_conflict_with_stored_persists_nothing() {
        let repo = repo_with(vec![vehicle(3, "Ford", "red", 2015)]);
        let batch = (1..=5).map(|id| vehicle(id, "Opel", "blue", 2001)).collect();

        let result = repo.bulk_save(batch).await;

        assert_eq!(result, Err(RepositoryError::DuplicateKey(VehicleId::new(3))));
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.find_all().await[&VehicleId::new(3)].brand, "Ford");
    }

    #[tokio::test]
    async fn test_bulk_save_conflict_within_batch_persists_nothing() {
        let repo = InMemoryVehicleRepository::new();
        let batch = vec![
            vehicle(1, "Ford", "red", 2015),
            vehicle(2, "Ford", "red", 2015),
            vehicle(1, "Opel", "blue", 2001),
        ];

        let result = repo.bulk_save(batch).await;

        assert_eq!(result, Err(RepositoryError::DuplicateKey(VehicleId::new(1))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_bulk_save_inserts_all() {
        let repo = InMemoryVehicleRepository::new();
        let batch = (1..=4).map(|id| vehicle(id, "Ford", "red", 2015)).collect();

        repo.bulk_save(batch).await.unwrap();

        assert_eq!(repo.len().await, 4);
    }

    #[tokio::test]
    async fn test_find_by_color_and_year() {
        let repo = repo_with(vec![
            vehicle(1, "Ford", "Red", 2015),
            vehicle(2, "Ford", "red", 2016),
            vehicle(3, "Ford", "blue", 2015),
        ]);

        let found = repo.find_by_color_and_year("RED", 2015).await.unwrap();

        assert_eq!(found.len(), 1);
        assert!(found.contains_key(&VehicleId::new(1)));
        assert_eq!(
            repo.find_by_color_and_year("green", 2015).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_find_by_brand_and_years_is_inclusive() {
        let repo = repo_with(vec![
            vehicle(1, "Ford", "red", 2000),
            vehicle(2, "FORD", "red", 2005),
            vehicle(3, "ford", "red", 2010),
            vehicle(4, "Ford", "red", 2011),
            vehicle(5, "Opel", "red", 2005),
        ]);

        let found = repo.find_by_brand_and_years("ford", 2000, 2010).await.unwrap();

        let mut ids: Vec<i64> = found.keys().map(|id| id.get()).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_brand_and_years_inverted_range_is_not_found() {
        let repo = repo_with(vec![vehicle(1, "Ford", "red", 2005)]);

        assert_eq!(
            repo.find_by_brand_and_years("Ford", 2010, 2000).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_average_speed_by_brand() {
        let mut a = vehicle(1, "Ford", "red", 2015);
        a.max_speed = 100.0;
        let mut b = vehicle(2, "Ford", "red", 2015);
        b.max_speed = 200.0;
        let mut c = vehicle(3, "Opel", "red", 2015);
        c.max_speed = 50.0;
        let repo = repo_with(vec![a, b, c]);

        assert_eq!(repo.average_speed_by_brand("ford").await, Ok(150.0));
        assert_eq!(
            repo.average_speed_by_brand("Tesla").await,
            Err(RepositoryError::BrandNotFound("Tesla".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_speed() {
        let repo = repo_with(vec![vehicle(1, "Ford", "red", 2015)]);

        repo.update_speed(VehicleId::new(1), 120.0).await.unwrap();

        assert_eq!(repo.find_all().await[&VehicleId::new(1)].max_speed, 120.0);
        assert_eq!(
            repo.update_speed(VehicleId::new(2), 120.0).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo_with(vec![vehicle(1, "Ford", "red", 2015)]);

        repo.delete(VehicleId::new(1)).await.unwrap();

        assert!(repo.is_empty().await);
        assert_eq!(
            repo.delete(VehicleId::new(1)).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_find_by_dimensions() {
        let repo = repo_with(vec![
            sized(1, 4.5, 1.8),
            sized(2, 6.0, 1.8),
            sized(3, 4.5, 2.5),
            sized(4, 4.0, 2.0),
        ]);

        let found = repo.find_by_dimensions(4.0..=5.0, 1.5..=2.0).await;

        let mut ids: Vec<i64> = found.keys().map(|id| id.get()).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn test_find_by_dimensions_empty_is_not_an_error() {
        let repo = repo_with(vec![sized(1, 4.5, 1.8)]);

        assert!(repo.find_by_dimensions(8.0..=9.0, 1.5..=2.0).await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let repo = InMemoryVehicleRepository::new();
        let handle = repo.clone();

        handle.save(vehicle(1, "Ford", "red", 2015)).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }
}
