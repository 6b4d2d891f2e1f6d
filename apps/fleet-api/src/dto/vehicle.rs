//! DTOs for vehicle endpoints

use std::collections::BTreeMap;

use fleetlink_domain::{ports::VehicleMap, VehicleDoc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Envelope for every endpoint returning a set of vehicles
#[derive(Debug, Serialize, ToSchema)]
pub struct VehiclesResponse {
    #[schema(example = "success")]
    pub message: String,
    /// Vehicles keyed by identifier
    pub data: BTreeMap<i64, VehicleDoc>,
}

impl VehiclesResponse {
    pub fn success(vehicles: VehicleMap) -> Self {
        Self {
            message: "success".to_string(),
            data: vehicles
                .into_iter()
                .map(|(id, vehicle)| (id.get(), VehicleDoc::from(vehicle)))
                .collect(),
        }
    }
}

/// Response body for a single successful creation
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Vehicle with ID 1 was created successfully")]
    pub success: String,
}

/// Response body for a successful batch creation
#[derive(Debug, Serialize, ToSchema)]
pub struct BatchCreatedResponse {
    #[schema(example = "created")]
    pub status: String,
    #[schema(example = "Successfully created vehicles")]
    pub message: String,
}

/// Response body for the brand average speed
#[derive(Debug, Serialize, ToSchema)]
pub struct AverageSpeedResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "average speed is 150.000000")]
    pub message: String,
    #[schema(example = 150.0)]
    pub average_speed: f64,
}

/// Request body for a speed update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSpeedRequest {
    /// New maximum speed in km/h
    #[schema(example = 120.0)]
    pub new_speed: f64,
}

/// Response body for a successful speed update
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedResponse {
    #[schema(example = "successfully updated vehicle with id 1")]
    pub success: String,
}

/// Query string of the dimensions search, e.g. `?length=4-5&width=1.5-2`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DimensionsQuery {
    /// Inclusive length range as `min-max`
    #[param(example = "4-5")]
    pub length: Option<String>,
    /// Inclusive width range as `min-max`
    #[param(example = "1.5-2")]
    pub width: Option<String>,
}

impl DimensionsQuery {
    /// Parse both ranges, or `None` if either is missing or malformed
    pub fn ranges(&self) -> Option<((f64, f64), (f64, f64))> {
        let length = parse_range(self.length.as_deref()?)?;
        let width = parse_range(self.width.as_deref()?)?;
        Some((length, width))
    }
}

/// Parse a `min-max` pair of floats
fn parse_range(raw: &str) -> Option<(f64, f64)> {
    let mut parts = raw.split('-');
    let (min, max) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "No vehicles found matching the given criteria")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
