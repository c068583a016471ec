use serde::{Deserialize, Serialize};

/// Unique province identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvinceId(u64);

impl ProvinceId {
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Unique city identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u64);

impl CityId {
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Geographic coordinate in decimal degrees.
///
/// Bounds (latitude in [-90, 90], longitude in [-180, 180]) are trusted
/// from the backend and not validated client-side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Named location nested under a province.
///
/// Cloned (cheaply) into UI state when selected; the directory itself is
/// immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Top-level administrative region with its ordered city list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: ProvinceId,
    pub name: String,
    pub cities: Vec<City>,
}
