//! Amenity records, coordinates and route output rows.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use geo::Point;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Validates latitude ∈ [-90, 90] and longitude ∈ [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for non-finite or out-of-range
    /// values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidParameter(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidParameter(format!(
                "longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Geometry representation with x = longitude, y = latitude.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.point()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Travel mode of a network graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelMode {
    Walk,
    Drive,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Drive => write!(f, "drive"),
        }
    }
}

/// One row of the caller-supplied amenity table.
///
/// The exact coordinate pair acts as the natural key: ingestion is expected
/// to have dropped exact-coordinate duplicates already, and
/// [`dedup_by_coordinate`] re-applies the same rule defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityRecord {
    /// Display name; missing and near-empty names feed the gem score.
    pub name: Option<String>,
    /// Amenity category, e.g. `museum` or `cafe`.
    pub category: String,
    /// Free-form OSM-style tag mapping. May be empty.
    pub tags: HashMap<String, String>,
    pub coordinate: Coordinate,
}

impl AmenityRecord {
    pub fn new(
        name: Option<String>,
        category: impl Into<String>,
        tags: HashMap<String, String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            name,
            category: category.into(),
            tags,
            coordinate,
        }
    }

    /// Name for display purposes; placeholder for unnamed amenities.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "(unnamed)",
        }
    }
}

/// Drops records whose exact coordinate pair was already seen, keeping the
/// first occurrence. Collisions are discarded whole, never merged, so two
/// records with different categories can never be conflated.
pub fn dedup_by_coordinate(records: &[AmenityRecord]) -> Vec<AmenityRecord> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| {
            let key = (
                record.coordinate.lat().to_bits(),
                record.coordinate.lon().to_bits(),
            );
            seen.insert(key)
        })
        .cloned()
        .collect()
}

/// A geotagged photo used as a route or query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPoint {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

/// One visited stop in a planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub record: AmenityRecord,
    /// Distance from the previous stop (or the start for the first step).
    pub leg_km: f64,
    /// Running sum of leg distances from the route start.
    pub total_km: f64,
}

/// An amenity together with its hidden-gem score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAmenity {
    pub record: AmenityRecord,
    pub score: u32,
}

/// An amenity together with its distance from a query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub record: AmenityRecord,
    pub distance_km: f64,
}
