//! # FleetLink Domain Layer
//!
//! This crate contains the pure business logic and domain models for the FleetLink
//! vehicle registry. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Vehicle, Dimensions, VehicleDoc)
//! - **Ports**: Trait definitions for external dependencies (VehicleRepository, VehicleLoader)
//! - **Services**: Validation and error-kind translation over a repository
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, files, locks).
//! All external dependencies are expressed as traits (ports) that will be implemented
//! by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use fleetlink_domain::ports::VehicleRepository;
//! use fleetlink_domain::vehicle::{VehicleDoc, VehicleService, VehicleServicePort};
//!
//! // The service is generic over any VehicleRepository implementation
//! async fn example<R: VehicleRepository>(service: VehicleService<R>, doc: VehicleDoc) {
//!     let saved = service.create(doc).await.unwrap();
//!     println!("Created vehicle: {}", saved.id);
//! }
//! ```

pub mod ports;
pub mod vehicle;

// Re-export commonly used types
pub use ports::{VehicleLoader, VehicleRepository};
pub use vehicle::{Vehicle, VehicleDoc, VehicleId, VehicleService, VehicleServicePort};
