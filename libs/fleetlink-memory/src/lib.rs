//! # FleetLink Memory Adapters
//!
//! Infrastructure implementations of the domain ports:
//!
//! - [`InMemoryVehicleRepository`](infrastructure::InMemoryVehicleRepository):
//!   a lock-guarded, process-lifetime vehicle collection
//! - [`JsonFileLoader`](infrastructure::JsonFileLoader): bootstraps that
//!   collection from a JSON array of vehicle documents

pub mod infrastructure;

pub use infrastructure::{InMemoryVehicleRepository, JsonFileLoader};
