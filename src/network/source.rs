//! Collaborator interface supplying raw network data for a region.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::model::{Coordinate, TravelMode};

/// A graph node as delivered by the map-data collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Stable identifier, unique within one [`NetworkData`].
    pub id: u64,
    pub coordinate: Coordinate,
}

/// A street segment between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: u64,
    pub to: u64,
    /// Segment length in metres; the shortest-path weight.
    pub length_m: f64,
    /// One-way segments are traversable only from `from` to `to`.
    pub one_way: bool,
}

/// Raw node and edge lists for one region and travel mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Supplies network data for a fixed region.
///
/// Implementations wrap whatever map-data backend the embedding uses; a
/// load may take seconds to minutes, so callers build from it at most once
/// per mode (see [`NetworkGraphCache`](crate::network::NetworkGraphCache)).
pub trait NetworkSource: Send + Sync {
    /// Loads the raw network for `region` in the given travel mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphBuild`] when the backend cannot deliver the
    /// region's network.
    fn load_network(&self, region: &str, mode: TravelMode) -> Result<NetworkData, Error>;
}
