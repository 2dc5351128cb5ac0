//! Greedy route construction.

mod planner;
mod tour;

pub use planner::plan_route;
pub use tour::{CANDIDATE_FACTOR, recommend_tour};
