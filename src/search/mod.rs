//! Radius search around a query origin.

use std::collections::HashSet;

use log::debug;

use crate::Error;
use crate::algo::distance_order;
use crate::metric::RouteMetric;
use crate::model::{AmenityRecord, Coordinate, NearbyPlace, is_food_category};

/// Category pre-filter applied before any distance is measured.
///
/// [`CategoryFilter::FoodOnly`] and [`CategoryFilter::NonFood`] are the two
/// presets of the amenity taxonomy: food covers cafes, restaurants, fast
/// food, bars, pubs, food courts, ice cream shops and biergartens; the
/// complement covers everything else, hidden-gem categories included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    FoodOnly,
    NonFood,
    Include(HashSet<String>),
    Exclude(HashSet<String>),
}

impl CategoryFilter {
    fn admits(&self, category: &str) -> bool {
        match self {
            Self::Any => true,
            Self::FoodOnly => is_food_category(category),
            Self::NonFood => !is_food_category(category),
            Self::Include(set) => set.contains(category),
            Self::Exclude(set) => !set.contains(category),
        }
    }
}

/// Finds candidates within `max_km` of `origin`, closest first.
///
/// Candidates are filtered by category, then measured with `metric`;
/// failed measurements are skipped, the `max_km` boundary is inclusive,
/// and ties in the ascending sort keep their original input order.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `max_km` is not a positive
/// finite number. Per-candidate metric failures never surface here.
pub fn find_within(
    origin: Coordinate,
    candidates: &[AmenityRecord],
    metric: RouteMetric<'_>,
    max_km: f64,
    filter: &CategoryFilter,
) -> Result<Vec<NearbyPlace>, Error> {
    if !max_km.is_finite() || max_km <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "max_km must be a positive number, got {max_km}"
        )));
    }

    let eligible: Vec<&AmenityRecord> = candidates
        .iter()
        .filter(|record| filter.admits(&record.category))
        .collect();

    let targets: Vec<Coordinate> = eligible.iter().map(|record| record.coordinate).collect();
    let measured = metric.measure_many(origin, &targets);

    let mut nearby: Vec<NearbyPlace> = eligible
        .into_iter()
        .zip(measured)
        .filter_map(|(record, result)| match result {
            Ok(distance_km) if distance_km <= max_km => Some(NearbyPlace {
                record: record.clone(),
                distance_km,
            }),
            Ok(_) => None,
            Err(err) => {
                debug!("skipping '{}': {err}", record.display_name());
                None
            }
        })
        .collect();

    // Stable sort keeps equal distances in input order.
    nearby.sort_by(|a, b| distance_order(a.distance_km, b.distance_km));
    Ok(nearby)
}
