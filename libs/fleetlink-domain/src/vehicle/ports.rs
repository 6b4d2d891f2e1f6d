//! Port trait for the Vehicle Service
//!
//! This module defines the trait that abstracts the vehicle service operations.
//! The HTTP layer depends on this contract, while the concrete `VehicleService`
//! in `service.rs` provides the implementation.

use std::future::Future;

use crate::ports::VehicleMap;
use crate::vehicle::{entity::Vehicle, entity::VehicleDoc, error::ServiceError, ids::VehicleId};

/// Port trait for vehicle operations
pub trait VehicleServicePort: Send + Sync {
    /// List every stored vehicle
    fn find_all(&self) -> impl Future<Output = VehicleMap> + Send;

    /// Validate and store a single vehicle
    ///
    /// # Arguments
    ///
    /// * `doc` - The wire document to validate and store
    ///
    /// # Returns
    ///
    /// The stored `Vehicle`
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` listing every invalid field
    /// - `ServiceError::DuplicateKey` if the identifier is taken
    fn create(&self, doc: VehicleDoc)
        -> impl Future<Output = Result<Vehicle, ServiceError>> + Send;

    /// Validate every document, then store the whole batch or nothing
    ///
    /// # Arguments
    ///
    /// * `docs` - The wire documents making up the batch
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` for the first invalid document
    /// - `ServiceError::DuplicateKey` if any identifier is taken
    fn bulk_create(
        &self,
        docs: Vec<VehicleDoc>,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Find vehicles by color (case-insensitive) and exact year
    ///
    /// # Arguments
    ///
    /// * `color` - The color to match, in any case
    /// * `year` - The exact fabrication year
    ///
    /// # Returns
    ///
    /// The matching vehicles, keyed by identifier
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if nothing matches
    fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> impl Future<Output = Result<VehicleMap, ServiceError>> + Send;

    /// Find vehicles by brand (case-insensitive) within an inclusive year range
    ///
    /// # Arguments
    ///
    /// * `brand` - The brand to match, in any case
    /// * `from` - First fabrication year, inclusive (zero means unset)
    /// * `to` - Last fabrication year, inclusive (zero means unset)
    ///
    /// # Returns
    ///
    /// The matching vehicles, keyed by identifier
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if the brand is empty or a bound is zero
    /// - `ServiceError::NotFound` if nothing matches
    fn find_by_brand_and_years(
        &self,
        brand: &str,
        from: i32,
        to: i32,
    ) -> impl Future<Output = Result<VehicleMap, ServiceError>> + Send;

    /// Mean maximum speed of a brand
    ///
    /// # Arguments
    ///
    /// * `brand` - The brand to aggregate over, in any case
    ///
    /// # Returns
    ///
    /// The arithmetic mean of `max_speed` across the brand's vehicles
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if the brand is empty
    /// - `ServiceError::BrandNotFound` if the brand has no vehicles
    fn average_speed_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<f64, ServiceError>> + Send;

    /// Change the maximum speed of a vehicle
    ///
    /// # Arguments
    ///
    /// * `id` - The vehicle to update
    /// * `new_speed` - The new maximum speed in km/h
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidArgument` if the id or speed is out of bounds
    /// - `ServiceError::NotFound` if the identifier is absent
    fn update_speed(
        &self,
        id: VehicleId,
        new_speed: f64,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Remove a vehicle
    ///
    /// # Arguments
    ///
    /// * `id` - The vehicle to remove
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the identifier is absent
    fn delete(&self, id: VehicleId) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Find vehicles within inclusive length and width ranges
    ///
    /// # Arguments
    ///
    /// * `min_length`, `max_length` - Inclusive length bounds
    /// * `min_width`, `max_width` - Inclusive width bounds
    ///
    /// # Returns
    ///
    /// The vehicles falling in both ranges, keyed by identifier
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoMatch` if nothing falls in both ranges
    fn find_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> impl Future<Output = Result<VehicleMap, ServiceError>> + Send;
}
