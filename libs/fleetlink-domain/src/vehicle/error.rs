//! Domain errors for vehicle operations
//!
//! Repository, service and loader each speak their own error vocabulary.
//! None of these types know anything about transport status codes; mapping
//! a kind to a response is the boundary layer's job.

use thiserror::Error;

use crate::vehicle::ids::VehicleId;

/// Errors raised by a [`VehicleRepository`](crate::ports::VehicleRepository)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// A vehicle with the same identifier is already stored
    #[error("A vehicle with ID {0} already exists")]
    DuplicateKey(VehicleId),

    /// No stored vehicle matched the key or attributes
    #[error("No vehicles found matching the given criteria")]
    NotFound,

    /// An aggregate over a brand matched zero vehicles
    #[error("No vehicles found for brand '{0}'")]
    BrandNotFound(String),
}

/// Errors raised by the vehicle service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// One or more fields failed validation, in rule order
    #[error("There was an error validating the following attributes: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// A vehicle with the same identifier is already stored
    #[error("A vehicle with ID {0} already exists")]
    DuplicateKey(VehicleId),

    /// No vehicle matched the key or attributes
    #[error("No vehicles found matching the given criteria")]
    NotFound,

    /// An aggregate over a brand matched zero vehicles
    #[error("No vehicles found for brand '{0}'")]
    BrandNotFound(String),

    /// A domain bound was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A range query over dimensions matched nothing
    #[error("No vehicles match the requested dimensions")]
    NoMatch,
}

impl ServiceError {
    /// Create a validation error from the offending field names
    pub fn validation(fields: Vec<&'static str>) -> Self {
        Self::Validation { fields }
    }

    /// Create an invalid argument error with a message
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey(id) => Self::DuplicateKey(id),
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::BrandNotFound(brand) => Self::BrandNotFound(brand),
        }
    }
}

/// Errors raised while bootstrapping the collection
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be read
    #[error("Failed to read vehicle source: {0}")]
    Io(#[from] std::io::Error),

    /// The source was read but could not be decoded
    #[error("Failed to parse vehicle source: {0}")]
    Parse(String),

    /// Two records in the source share an identifier
    #[error("Duplicate vehicle ID {0} in source")]
    DuplicateId(VehicleId),
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
