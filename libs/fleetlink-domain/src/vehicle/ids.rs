use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Vehicle
///
/// VehicleId wraps the integer key used by the registry so that identifiers
/// cannot be mixed up with years, capacities or other integer attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    /// Create a VehicleId from a raw integer
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the inner integer value
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Whether the identifier is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VehicleId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<VehicleId> for i64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}
