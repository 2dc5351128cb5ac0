//! Greedy nearest-unvisited route construction.

use itertools::Itertools;
use log::debug;

use crate::Error;
use crate::algo::nearest_index;
use crate::metric::RouteMetric;
use crate::model::{AmenityRecord, Coordinate, RouteStep};

/// Builds an ordered visiting route from `start` through `candidates`.
///
/// This is a greedy nearest-unvisited heuristic, not an optimal tour:
/// every round measures each remaining candidate from the current position
/// and steps to the closest one, ties broken by original input order.
///
/// Candidates are first deduplicated by exact category (first occurrence
/// wins, so a route never visits two same-category places) and then capped
/// to `max_stops`. Low category diversity can therefore produce fewer
/// stops than requested; callers wanting `k` stops should over-provide
/// candidates (see [`recommend_tour`](crate::routing::recommend_tour)).
///
/// Candidates the metric cannot measure are dropped. When a round produces
/// no usable distance at all, the prefix built so far is returned — an
/// empty or short route is not an error.
///
/// Each [`RouteStep`] carries the leg distance from the previous stop and
/// the running sum of legs. The total is never recomputed from the start
/// point, so network-metric totals reflect path distance.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `max_stops` is zero.
pub fn plan_route(
    start: Coordinate,
    candidates: &[AmenityRecord],
    metric: RouteMetric<'_>,
    max_stops: usize,
) -> Result<Vec<RouteStep>, Error> {
    if max_stops == 0 {
        return Err(Error::InvalidParameter(
            "max_stops must be at least 1".to_string(),
        ));
    }

    let mut remaining: Vec<AmenityRecord> = candidates
        .iter()
        .unique_by(|record| record.category.clone())
        .take(max_stops)
        .cloned()
        .collect();

    let mut route: Vec<RouteStep> = Vec::with_capacity(remaining.len());
    let mut current = start;
    let mut total_km = 0.0;

    while !remaining.is_empty() {
        let mut reachable: Vec<(AmenityRecord, f64)> = Vec::with_capacity(remaining.len());
        for record in remaining.drain(..) {
            match metric.measure(current, record.coordinate) {
                Ok(distance_km) => reachable.push((record, distance_km)),
                Err(err) => {
                    debug!("dropping unreachable '{}': {err}", record.display_name());
                }
            }
        }

        let Some(best) = nearest_index(reachable.iter().map(|(_, km)| *km)) else {
            break;
        };

        let (record, leg_km) = reachable.remove(best);
        total_km += leg_km;
        current = record.coordinate;
        route.push(RouteStep {
            record,
            leg_km,
            total_km,
        });

        remaining = reachable.into_iter().map(|(record, _)| record).collect();
    }

    Ok(route)
}
