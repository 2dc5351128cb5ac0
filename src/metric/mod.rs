//! Distance metrics for planning and proximity queries.
//!
//! A [`RouteMetric`] is chosen once per operation and supplies every
//! distance used by that operation: either the straight-line haversine
//! formula or a shortest path over one of the cached network graphs.

mod haversine;

pub use haversine::{EARTH_RADIUS_KM, haversine_km};

use rayon::prelude::*;

use crate::Error;
use crate::model::{Coordinate, TravelMode};
use crate::network::NetworkGraphCache;

/// Pluggable distance between two coordinates, in kilometres.
#[derive(Clone, Copy)]
pub enum RouteMetric<'g> {
    /// Great-circle distance. Total: never fails.
    StraightLine,
    /// Shortest path over the pedestrian network. May fail per pair.
    Pedestrian(&'g NetworkGraphCache),
    /// Shortest path over the road network. May fail per pair.
    Road(&'g NetworkGraphCache),
}

impl RouteMetric<'_> {
    /// Measures the distance from `from` to `to` in kilometres.
    ///
    /// # Errors
    ///
    /// Network variants return [`Error::RouteUnavailable`] when either
    /// endpoint cannot be snapped onto the graph, no path connects them, or
    /// the graph failed to build. Callers treat this as "unreachable by this
    /// metric" and skip the pair.
    pub fn measure(&self, from: Coordinate, to: Coordinate) -> Result<f64, Error> {
        match self {
            Self::StraightLine => Ok(haversine_km(from.point(), to.point())),
            Self::Pedestrian(cache) => cache
                .shortest_path_km(TravelMode::Walk, from, to)
                .map(|path| path.length_km),
            Self::Road(cache) => cache
                .shortest_path_km(TravelMode::Drive, from, to)
                .map(|path| path.length_km),
        }
    }

    /// Measures every target against one origin, preserving input order.
    ///
    /// Network lookups dominate here, so targets are measured in parallel.
    pub fn measure_many(
        &self,
        origin: Coordinate,
        targets: &[Coordinate],
    ) -> Vec<Result<f64, Error>> {
        targets
            .par_iter()
            .map(|target| self.measure(origin, *target))
            .collect()
    }
}
