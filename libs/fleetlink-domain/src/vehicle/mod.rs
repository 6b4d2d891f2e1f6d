//! Vehicle domain module
//!
//! This module contains the vehicle record, its wire shape, the validation
//! rules applied to incoming documents, and the service orchestrating them.

pub mod entity;
pub mod error;
pub mod ids;
pub mod ports;
pub mod service;
pub mod validation;

pub use entity::{Dimensions, Vehicle, VehicleDoc};
pub use error::{LoadError, RepositoryError, ServiceError};
pub use ids::VehicleId;
pub use ports::VehicleServicePort;
pub use service::{ServiceConfig, VehicleService};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::VehicleDoc;

    /// A document that passes every validation rule
    pub(crate) fn sample_doc(id: i64) -> VehicleDoc {
        VehicleDoc {
            id,
            brand: "Ford".to_string(),
            model: "Focus".to_string(),
            registration: format!("{:04}-ABC", id),
            color: "red".to_string(),
            fabrication_year: 2015,
            capacity: 5,
            max_speed: 190.0,
            fuel_type: "gasoline".to_string(),
            transmission: "manual".to_string(),
            weight: 1300.0,
            height: 1.5,
            length: 4.4,
            width: 1.8,
        }
    }
}
