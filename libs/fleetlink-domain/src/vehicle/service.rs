//! Vehicle service - Business logic orchestration
//!
//! This module validates incoming requests, delegates to the repository port,
//! and translates repository outcomes into service error kinds.

use tracing::debug;

use super::{
    entity::{Vehicle, VehicleDoc},
    error::ServiceError,
    ids::VehicleId,
    ports::VehicleServicePort,
    validation::{validate_brand_years, validate_doc},
};
use crate::ports::{VehicleMap, VehicleRepository};

/// Configuration for the vehicle service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Highest speed accepted by `update_speed`, in km/h (default: 350)
    pub max_speed_kmh: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_speed_kmh: 350.0,
        }
    }
}

/// Service for managing the vehicle registry
///
/// This service encapsulates the business rules of the registry:
/// - Validates documents before anything reaches storage
/// - Bounds speed updates to plausible values
/// - Maps repository misses onto its own error kinds
///
/// ## Static Dispatch
///
/// The service is generic over any `VehicleRepository` implementation, so a
/// different backend can be swapped in without touching this layer or the
/// HTTP handlers.
pub struct VehicleService<R> {
    repository: R,
    config: ServiceConfig,
}

impl<R> VehicleService<R>
where
    R: VehicleRepository,
{
    /// Create a new VehicleService with the given repository and configuration
    pub fn new(repository: R, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Create a new VehicleService with default configuration
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, ServiceConfig::default())
    }

    /// Get the service configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn speed_in_bounds(&self, speed: f64) -> bool {
        speed > 0.0 && speed <= self.config.max_speed_kmh
    }
}

impl<R> VehicleServicePort for VehicleService<R>
where
    R: VehicleRepository,
{
    async fn find_all(&self) -> VehicleMap {
        self.repository.find_all().await
    }

    async fn create(&self, doc: VehicleDoc) -> Result<Vehicle, ServiceError> {
        if let Err(fields) = validate_doc(&doc) {
            debug!(id = doc.id, ?fields, "Rejected vehicle document");
            return Err(ServiceError::validation(fields));
        }

        Ok(self.repository.save(Vehicle::from(doc)).await?)
    }

    async fn bulk_create(&self, docs: Vec<VehicleDoc>) -> Result<(), ServiceError> {
        // Business rule: nothing is saved unless every document is valid
        for doc in &docs {
            if let Err(fields) = validate_doc(doc) {
                debug!(id = doc.id, ?fields, "Rejected batch on invalid document");
                return Err(ServiceError::validation(fields));
            }
        }

        let vehicles = docs.into_iter().map(Vehicle::from).collect();
        Ok(self.repository.bulk_save(vehicles).await?)
    }

    async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> Result<VehicleMap, ServiceError> {
        Ok(self.repository.find_by_color_and_year(color, year).await?)
    }

    async fn find_by_brand_and_years(
        &self,
        brand: &str,
        from: i32,
        to: i32,
    ) -> Result<VehicleMap, ServiceError> {
        validate_brand_years(brand, from, to).map_err(ServiceError::validation)?;

        Ok(self
            .repository
            .find_by_brand_and_years(brand, from, to)
            .await?)
    }

    async fn average_speed_by_brand(&self, brand: &str) -> Result<f64, ServiceError> {
        if brand.is_empty() {
            return Err(ServiceError::validation(vec!["brand"]));
        }

        Ok(self.repository.average_speed_by_brand(brand).await?)
    }

    async fn update_speed(&self, id: VehicleId, new_speed: f64) -> Result<(), ServiceError> {
        if !id.is_positive() || !self.speed_in_bounds(new_speed) {
            return Err(ServiceError::invalid_argument(format!(
                "id must be positive and speed within (0, {}] km/h",
                self.config.max_speed_kmh
            )));
        }

        self.repository
            .update_speed(id, new_speed)
            .await
            .map_err(|err| {
                debug!(id = %id, error = %err, "Speed update missed");
                ServiceError::NotFound
            })
    }

    async fn delete(&self, id: VehicleId) -> Result<(), ServiceError> {
        self.repository.delete(id).await.map_err(|err| {
            debug!(id = %id, error = %err, "Delete missed");
            ServiceError::NotFound
        })
    }

    async fn find_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> Result<VehicleMap, ServiceError> {
        let found = self
            .repository
            .find_by_dimensions(min_length..=max_length, min_width..=max_width)
            .await;

        if found.is_empty() {
            return Err(ServiceError::NoMatch);
        }
        Ok(found)
    }
}
