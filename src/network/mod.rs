//! Pedestrian and road network graphs.
//!
//! The raw network for a region comes from an external [`NetworkSource`]
//! collaborator, which may take minutes to answer. Built graphs are held by
//! the [`NetworkGraphCache`], one per travel mode, for the rest of the
//! process lifetime.

mod cache;
mod dijkstra;
mod graph;
mod source;

pub use cache::NetworkGraphCache;
pub use graph::{MAX_SNAP_DISTANCE_KM, NetworkGraph, NetworkPath};
pub use source::{NetworkData, NetworkEdge, NetworkNode, NetworkSource};
