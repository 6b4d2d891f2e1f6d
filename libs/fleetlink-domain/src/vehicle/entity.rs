//! Domain entities for the vehicle registry
//!
//! A [`Vehicle`] is the canonical record stored by a repository. A
//! [`VehicleDoc`] is its flattened wire shape, used only at the transport
//! boundary. Mapping between the two is total and lossless.

use serde::{Deserialize, Serialize};

use crate::vehicle::ids::VehicleId;

/// Physical dimensions of a vehicle, in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// A vehicle record as held by the registry
///
/// Vehicles are created from validated [`VehicleDoc`] input, stored once,
/// may have their maximum speed updated in place, and are removed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique key within the collection
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Passenger capacity
    pub capacity: i32,
    /// Maximum speed in km/h
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub dimensions: Dimensions,
}

impl Vehicle {
    /// Case-insensitive comparison against the vehicle's brand
    pub fn brand_matches(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.to_lowercase()
    }

    /// Case-insensitive comparison against the vehicle's color
    pub fn color_matches(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }
}

/// Wire representation of a vehicle
///
/// Field names follow the public JSON contract (`year`, `passengers`,
/// `max_speed`, ...). Dimensions are flattened into the document. Missing
/// fields decode to their zero value so that validation can report them.
///
/// # Example
///
/// ```rust
/// use fleetlink_domain::vehicle::{Vehicle, VehicleDoc};
///
/// let doc: VehicleDoc = serde_json::from_str(r#"{
///     "id": 1, "brand": "Ford", "model": "Focus", "registration": "AB-123",
///     "color": "red", "year": 2015, "passengers": 5, "max_speed": 190.0,
///     "fuel_type": "gas", "transmission": "manual", "weight": 1300.0,
///     "height": 1.5, "length": 4.4, "width": 1.8
/// }"#).unwrap();
///
/// let vehicle = Vehicle::from(doc.clone());
/// assert_eq!(vehicle.dimensions.length, 4.4);
/// assert_eq!(VehicleDoc::from(&vehicle), doc);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct VehicleDoc {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Ford"))]
    pub brand: String,
    #[cfg_attr(feature = "openapi", schema(example = "Focus"))]
    pub model: String,
    #[cfg_attr(feature = "openapi", schema(example = "1234-ABC"))]
    pub registration: String,
    #[cfg_attr(feature = "openapi", schema(example = "red"))]
    pub color: String,
    #[serde(rename = "year")]
    #[cfg_attr(feature = "openapi", schema(example = 2015))]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub capacity: i32,
    #[cfg_attr(feature = "openapi", schema(example = 190.0))]
    pub max_speed: f64,
    #[cfg_attr(feature = "openapi", schema(example = "gasoline"))]
    pub fuel_type: String,
    #[cfg_attr(feature = "openapi", schema(example = "manual"))]
    pub transmission: String,
    #[cfg_attr(feature = "openapi", schema(example = 1300.0))]
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<VehicleDoc> for Vehicle {
    fn from(doc: VehicleDoc) -> Self {
        Self {
            id: VehicleId::new(doc.id),
            brand: doc.brand,
            model: doc.model,
            registration: doc.registration,
            color: doc.color,
            fabrication_year: doc.fabrication_year,
            capacity: doc.capacity,
            max_speed: doc.max_speed,
            fuel_type: doc.fuel_type,
            transmission: doc.transmission,
            weight: doc.weight,
            dimensions: Dimensions {
                height: doc.height,
                length: doc.length,
                width: doc.width,
            },
        }
    }
}

impl From<&Vehicle> for VehicleDoc {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.get(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            registration: vehicle.registration.clone(),
            color: vehicle.color.clone(),
            fabrication_year: vehicle.fabrication_year,
            capacity: vehicle.capacity,
            max_speed: vehicle.max_speed,
            fuel_type: vehicle.fuel_type.clone(),
            transmission: vehicle.transmission.clone(),
            weight: vehicle.weight,
            height: vehicle.dimensions.height,
            length: vehicle.dimensions.length,
            width: vehicle.dimensions.width,
        }
    }
}

impl From<Vehicle> for VehicleDoc {
    fn from(vehicle: Vehicle) -> Self {
        Self::from(&vehicle)
    }
}
