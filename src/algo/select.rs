//! The proximity search and the route planner both follow the same rule:
//! order candidates by measured distance and break ties by original input
//! position. Centralising the comparison keeps the two call sites from
//! drifting apart.

use std::cmp::Ordering;

/// Total ordering over measured distances. Distances are produced by the
/// metrics and are always finite and non-negative; incomparable values
/// collapse to `Equal` so that the positional tie-break decides.
pub(crate) fn distance_order(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Index of the smallest distance, ties resolved to the earliest index.
pub(crate) fn nearest_index<I>(distances: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    distances
        .into_iter()
        .enumerate()
        .min_by(|a, b| distance_order(a.1, b.1).then(a.0.cmp(&b.0)))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_index_picks_minimum() {
        assert_eq!(nearest_index(vec![3.0, 1.0, 2.0]), Some(1));
    }

    #[test]
    fn nearest_index_breaks_ties_by_position() {
        assert_eq!(nearest_index(vec![2.0, 1.0, 1.0]), Some(1));
    }

    #[test]
    fn nearest_index_of_empty_is_none() {
        assert_eq!(nearest_index(Vec::new()), None);
    }

    #[test]
    fn distance_order_is_ascending() {
        assert_eq!(distance_order(1.0, 2.0), Ordering::Less);
        assert_eq!(distance_order(2.0, 2.0), Ordering::Equal);
    }
}
