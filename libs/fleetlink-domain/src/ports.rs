//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::collections::HashMap;
use std::future::Future;
use std::ops::RangeInclusive;

use crate::vehicle::{
    entity::Vehicle,
    error::{LoadError, RepositoryError},
    ids::VehicleId,
};

/// A keyed collection of vehicles, as returned by every read query
pub type VehicleMap = HashMap<VehicleId, Vehicle>;

/// Port for vehicle storage
///
/// This trait abstracts away the backing collection. Implementations must:
/// - Keep identifiers unique (never overwrite on insert)
/// - Return independent copies from every read, so that mutating a result
///   never affects stored state
/// - Be safe to call from many tasks at once
///
/// String comparisons on brand and color are case-insensitive.
pub trait VehicleRepository: Send + Sync {
    /// Return a copy of every stored vehicle
    fn find_all(&self) -> impl Future<Output = VehicleMap> + Send;

    /// Insert a vehicle unless its identifier is taken
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateKey` if the identifier is already stored
    fn save(&self, vehicle: Vehicle)
        -> impl Future<Output = Result<Vehicle, RepositoryError>> + Send;

    /// Insert a batch of vehicles atomically
    ///
    /// Either every vehicle is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateKey` for the first identifier that is
    /// already stored or repeated within the batch
    fn bulk_save(
        &self,
        vehicles: Vec<Vehicle>,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Find vehicles of a given color built in a given year
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if nothing matches
    fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> impl Future<Output = Result<VehicleMap, RepositoryError>> + Send;

    /// Find vehicles of a brand built within `from..=to`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if nothing matches
    fn find_by_brand_and_years(
        &self,
        brand: &str,
        from: i32,
        to: i32,
    ) -> impl Future<Output = Result<VehicleMap, RepositoryError>> + Send;

    /// Mean maximum speed over every vehicle of a brand
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::BrandNotFound` if the brand has no vehicles
    fn average_speed_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<f64, RepositoryError>> + Send;

    /// Overwrite the maximum speed of one vehicle
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the identifier is absent
    fn update_speed(
        &self,
        id: VehicleId,
        new_speed: f64,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove one vehicle
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the identifier is absent
    fn delete(&self, id: VehicleId) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Find vehicles whose length and width both fall in the given ranges
    ///
    /// An empty result is not an error at this layer.
    fn find_by_dimensions(
        &self,
        length: RangeInclusive<f64>,
        width: RangeInclusive<f64>,
    ) -> impl Future<Output = VehicleMap> + Send;
}

/// Port for the startup data source
pub trait VehicleLoader: Send + Sync {
    /// Load the initial collection
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the source cannot be read or decoded, or if it
    /// repeats an identifier
    fn load(&self) -> impl Future<Output = Result<VehicleMap, LoadError>> + Send;
}
