//! Route and proximity engine for short sightseeing tours.
//!
//! Given a geotagged photo as a starting point and a catalogue of amenities
//! pulled from map data, this crate scores amenities for "hidden gem"
//! novelty, finds amenities within a radius of a point, and builds an
//! ordered visiting route with a greedy nearest-unvisited heuristic.
//!
//! Distances are pluggable through [`RouteMetric`]: straight-line haversine,
//! or shortest paths over a pedestrian or road network. Network graphs are
//! expensive to build, so they are owned by a [`NetworkGraphCache`] that
//! constructs each mode at most once per process and shares it afterwards.
//!
//! The crate performs no file or network I/O of its own. Amenity rows and
//! the raw network data both come from caller-supplied collaborators; see
//! [`NetworkSource`] for the routing side.

mod algo;

pub mod error;
pub mod metric;
pub mod model;
pub mod network;
pub mod prelude;
pub mod routing;
pub mod scoring;
pub mod search;

pub use error::Error;
pub use metric::{RouteMetric, haversine_km};
pub use model::{
    AmenityRecord, Coordinate, NearbyPlace, PhotoPoint, RouteStep, ScoredAmenity, TravelMode,
};
pub use network::{
    NetworkData, NetworkEdge, NetworkGraph, NetworkGraphCache, NetworkNode, NetworkPath,
    NetworkSource,
};
pub use routing::{plan_route, recommend_tour};
pub use scoring::{rank_top_n, rank_top_n_by_category, score};
pub use search::{CategoryFilter, find_within};
