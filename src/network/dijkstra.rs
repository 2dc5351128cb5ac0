use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::DiGraph, graph::NodeIndex, visit::EdgeRef};

use super::graph::{GraphEdge, GraphNode};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u32,
    node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over edge lengths with path reconstruction.
///
/// Costs are whole metres. Returns the total length and the node sequence
/// from `start` to `target`, or `None` when `target` is unreachable.
pub(super) fn shortest_path_weights(
    graph: &DiGraph<GraphNode, GraphEdge>,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(u32, Vec<NodeIndex>)> {
    let mut distances: HashMap<NodeIndex, u32> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            return Some((cost, reconstruct(&predecessors, start, target)));
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let step = edge.weight().length_m.round().max(0.0) as u32;
            let next_cost = cost + step;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    None
}

fn reconstruct(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            // Unreachable targets never get here; reconstruct is only
            // called after the target has been popped from the heap.
            None => break,
        }
    }
    path.reverse();
    path
}
