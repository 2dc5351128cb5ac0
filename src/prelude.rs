pub use crate::Error;

// Core value types
pub use crate::model::{
    AmenityRecord, Coordinate, NearbyPlace, PhotoPoint, RouteStep, ScoredAmenity, TravelMode,
};

// Distance metrics
pub use crate::metric::{RouteMetric, haversine_km};

// Network graphs and their cache
pub use crate::network::{NetworkData, NetworkGraphCache, NetworkPath, NetworkSource};

// Scoring, search and planning entry points
pub use crate::routing::{plan_route, recommend_tour};
pub use crate::scoring::{rank_top_n, rank_top_n_by_category};
pub use crate::search::{CategoryFilter, find_within};
