//! Shared selection utilities for distance-ordered candidate lists.

mod select;

pub(crate) use select::{distance_order, nearest_index};
