//! End-to-end behaviour over a small street network: the cache builds the
//! graph once, and the planner and proximity search both consume the
//! pedestrian metric, skipping whatever the network cannot reach.

use chrono::DateTime;
use hashbrown::HashMap;

use gemtour::prelude::*;
use gemtour::{NetworkData, NetworkEdge, NetworkNode, haversine_km};

/// Five nodes in a west-to-east line, 0.01 degrees of longitude apart at
/// the equator (about 1.11 km straight-line). Every street segment is
/// 1500 m, so network distances are visibly longer than straight lines.
struct LineSource;

impl NetworkSource for LineSource {
    fn load_network(&self, _region: &str, _mode: TravelMode) -> Result<NetworkData, Error> {
        let nodes = (0..5)
            .map(|i| NetworkNode {
                id: i,
                coordinate: Coordinate::new(0.0, 0.01 * i as f64).unwrap(),
            })
            .collect();
        let edges = (0..4)
            .map(|i| NetworkEdge {
                from: i,
                to: i + 1,
                length_m: 1500.0,
                one_way: false,
            })
            .collect();
        Ok(NetworkData { nodes, edges })
    }
}

fn amenity(category: &str, lon: f64) -> AmenityRecord {
    AmenityRecord::new(
        None,
        category,
        HashMap::new(),
        Coordinate::new(0.0, lon).unwrap(),
    )
}

fn photo_at_origin() -> PhotoPoint {
    PhotoPoint {
        coordinate: Coordinate::new(0.0, 0.0).unwrap(),
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

#[test]
fn planned_tour_uses_path_distance_not_straight_line() {
    let cache = NetworkGraphCache::new("Lineville", Box::new(LineSource));
    let photo = photo_at_origin();
    // At graph nodes 2 and 4.
    let candidates = vec![amenity("museum", 0.02), amenity("pub", 0.04)];

    let route = plan_route(
        photo.coordinate,
        &candidates,
        RouteMetric::Pedestrian(&cache),
        2,
    )
    .unwrap();

    assert_eq!(route.len(), 2);
    assert_eq!(route[0].record.category, "museum");
    assert_eq!(route[1].record.category, "pub");

    // Two segments to the museum, two more to the pub.
    assert!((route[0].leg_km - 3.0).abs() < 1e-9);
    assert!((route[1].leg_km - 3.0).abs() < 1e-9);
    assert!((route[1].total_km - 6.0).abs() < 1e-9);

    // The street network detour exceeds the great-circle distance.
    let straight = haversine_km(
        photo.coordinate.point(),
        candidates[1].coordinate.point(),
    );
    assert!(route[1].total_km > straight);
}

#[test]
fn proximity_search_with_a_network_metric_is_inclusive_at_the_bound() {
    let cache = NetworkGraphCache::new("Lineville", Box::new(LineSource));
    let photo = photo_at_origin();
    let candidates = vec![amenity("museum", 0.02), amenity("pub", 0.04)];

    let nearby = find_within(
        photo.coordinate,
        &candidates,
        RouteMetric::Pedestrian(&cache),
        3.0,
        &CategoryFilter::Any,
    )
    .unwrap();

    // The museum sits at exactly 3.0 km of street distance; the pub at 6.0.
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].record.category, "museum");
    assert!((nearby[0].distance_km - 3.0).abs() < 1e-9);
}

#[test]
fn candidates_off_the_network_are_skipped_not_fatal() {
    let cache = NetworkGraphCache::new("Lineville", Box::new(LineSource));
    let photo = photo_at_origin();
    let candidates = vec![
        amenity("museum", 0.02),
        // Far outside the graph's extent; snapping fails for this one.
        AmenityRecord::new(
            None,
            "park",
            HashMap::new(),
            Coordinate::new(10.0, 10.0).unwrap(),
        ),
    ];

    let route = plan_route(
        photo.coordinate,
        &candidates,
        RouteMetric::Pedestrian(&cache),
        2,
    )
    .unwrap();
    assert_eq!(route.len(), 1);
    assert_eq!(route[0].record.category, "museum");

    let nearby = find_within(
        photo.coordinate,
        &candidates,
        RouteMetric::Pedestrian(&cache),
        10.0,
        &CategoryFilter::Any,
    )
    .unwrap();
    assert_eq!(nearby.len(), 1);
}

#[test]
fn ranked_gems_feed_a_recommended_tour() {
    let cache = NetworkGraphCache::new("Lineville", Box::new(LineSource));
    let photo = photo_at_origin();
    let mut records = vec![
        amenity("museum", 0.01),
        amenity("pub", 0.02),
        amenity("park", 0.03),
        // Same coordinate twice: ingestion dedup keeps the first.
        amenity("fountain", 0.03),
        amenity("fountain", 0.03),
    ];
    records[3].coordinate = Coordinate::new(0.0, 0.04).unwrap();
    records[4].coordinate = Coordinate::new(0.0, 0.04).unwrap();

    let records = gemtour::model::dedup_by_coordinate(&records);
    assert_eq!(records.len(), 4);

    let route = recommend_tour(
        photo.coordinate,
        &records,
        RouteMetric::Pedestrian(&cache),
        3,
    )
    .unwrap();

    assert_eq!(route.len(), 3);
    // Greedy east-bound walk along the line.
    let categories: Vec<&str> = route
        .iter()
        .map(|step| step.record.category.as_str())
        .collect();
    assert_eq!(categories, vec!["museum", "pub", "park"]);
    for window in route.windows(2) {
        assert!(window[0].total_km < window[1].total_km);
    }
}
