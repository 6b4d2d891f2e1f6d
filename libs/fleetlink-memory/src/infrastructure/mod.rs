//! Adapter implementations

mod json_loader;
mod memory_repository;

pub use json_loader::JsonFileLoader;
pub use memory_repository::InMemoryVehicleRepository;
