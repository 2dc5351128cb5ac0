//! Domain value types for amenities, photos and routes.

pub mod amenity;
pub mod categories;

pub use amenity::{
    AmenityRecord, Coordinate, NearbyPlace, PhotoPoint, RouteStep, ScoredAmenity, TravelMode,
    dedup_by_coordinate,
};
pub use categories::{
    FOOD_CATEGORIES, INTERESTING_CATEGORIES, filter_interesting, is_food_category,
    unique_categories,
};
