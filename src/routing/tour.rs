//! End-to-end tour recommendation: scorer feeding the planner.

use crate::Error;
use crate::metric::RouteMetric;
use crate::model::{AmenityRecord, Coordinate, RouteStep, filter_interesting};
use crate::routing::plan_route;
use crate::scoring::rank_top_n;

/// How many ranked candidates to hand the planner per requested stop.
/// Category deduplication inside the planner discards same-category
/// duplicates, so the shortlist is over-provisioned to keep the route
/// from starving below the requested length.
pub const CANDIDATE_FACTOR: usize = 3;

/// Recommends a tour of up to `stops` hidden gems starting at `start`.
///
/// Pipeline: keep the sightseeing-worthy categories, rank them by gem
/// score, shortlist the top `stops * 3`, then plan a greedy
/// nearest-unvisited route through the shortlist with `metric`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `stops` is zero. An empty
/// route (no interesting or reachable candidates) is a valid result.
pub fn recommend_tour(
    start: Coordinate,
    records: &[AmenityRecord],
    metric: RouteMetric<'_>,
    stops: usize,
) -> Result<Vec<RouteStep>, Error> {
    if stops == 0 {
        return Err(Error::InvalidParameter(
            "stops must be at least 1".to_string(),
        ));
    }

    let interesting = filter_interesting(records);
    let shortlist: Vec<AmenityRecord> =
        rank_top_n(&interesting, stops.saturating_mul(CANDIDATE_FACTOR))
            .into_iter()
            .map(|scored| scored.record)
            .collect();

    plan_route(start, &shortlist, metric, stops)
}
