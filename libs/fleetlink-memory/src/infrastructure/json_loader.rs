//! JSON bootstrap loader
//!
//! Reads a JSON array of vehicle documents (the same shape the HTTP API
//! accepts) and turns it into the repository's initial collection.

use std::collections::hash_map::Entry;
use std::future::Future;
use std::path::{Path, PathBuf};

use fleetlink_domain::{
    ports::{VehicleLoader, VehicleMap},
    vehicle::{LoadError, Vehicle, VehicleDoc},
};
use tracing::{error, info};

/// File-based implementation of the VehicleLoader port
///
/// Loaded documents are trusted and not validated, but identifiers must
/// still be unique.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    /// Create a loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the source path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VehicleLoader for JsonFileLoader {
    fn load(&self) -> impl Future<Output = Result<VehicleMap, LoadError>> + Send {
        let path = self.path.clone();

        async move {
            let bytes = tokio::fs::read(&path).await.map_err(|err| {
                error!(path = %path.display(), error = %err, "Failed to read vehicle source");
                LoadError::Io(err)
            })?;

            let docs: Vec<VehicleDoc> = serde_json::from_slice(&bytes)
                .map_err(|err| LoadError::Parse(format!("{}: {}", path.display(), err)))?;

            let mut vehicles = VehicleMap::with_capacity(docs.len());
            for doc in docs {
                let vehicle = Vehicle::from(doc);
                match vehicles.entry(vehicle.id) {
                    Entry::Occupied(_) => return Err(LoadError::DuplicateId(vehicle.id)),
                    Entry::Vacant(slot) => {
                        slot.insert(vehicle);
                    }
                }
            }

            info!(path = %path.display(), count = vehicles.len(), "Loaded vehicles");
            Ok(vehicles)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetlink_domain::vehicle::VehicleId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const TWO_VEHICLES: &str = r#"[
        {"id": 1, "brand": "Ford", "model": "Focus", "registration": "1111-AAA",
         "color": "red", "year": 2015, "passengers": 5, "max_speed": 190.0,
         "fuel_type": "gasoline", "transmission": "manual", "weight": 1300.0,
         "height": 1.5, "length": 4.4, "width": 1.8},
        {"id": 2, "brand": "Opel", "model": "Astra", "registration": "2222-BBB",
         "color": "blue", "year": 2018, "passengers": 5, "max_speed": 200.0,
         "fuel_type": "diesel", "transmission": "automatic", "weight": 1400.0,
         "height": 1.5, "length": 4.3, "width": 1.8}
    ]"#;

    #[tokio::test]
    async fn test_load_maps_documents() {
        let file = source(TWO_VEHICLES);
        let loader = JsonFileLoader::new(file.path());

        let vehicles = loader.load().await.unwrap();

        assert_eq!(vehicles.len(), 2);
        let opel = &vehicles[&VehicleId::new(2)];
        assert_eq!(opel.brand, "Opel");
        assert_eq!(opel.fabrication_year, 2018);
        assert_eq!(opel.dimensions.length, 4.3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let loader = JsonFileLoader::new("/nonexistent/fleetlink/vehicles.json");
        assert_eq!(
            loader.path(),
            Path::new("/nonexistent/fleetlink/vehicles.json")
        );

        assert!(matches!(loader.load().await, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let file = source("{ not json");
        let loader = JsonFileLoader::new(file.path());

        assert!(matches!(loader.load().await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_rejects_repeated_id() {
        let doubled = TWO_VEHICLES.replace("\"id\": 2", "\"id\": 1");
        let file = source(&doubled);
        let loader = JsonFileLoader::new(file.path());

        assert!(matches!(
            loader.load().await,
            Err(LoadError::DuplicateId(id)) if id == VehicleId::new(1)
        ));
    }
}
