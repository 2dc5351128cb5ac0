//! Routable graph with a spatial index for nearest-node snapping.

use geo::Point;
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use serde::{Deserialize, Serialize};

use super::dijkstra::shortest_path_weights;
use super::source::NetworkData;
use crate::Error;
use crate::metric::haversine_km;
use crate::model::Coordinate;

/// Maximum snapping distance between a query coordinate and its nearest
/// graph node. Queries further out are outside the network's extent.
pub const MAX_SNAP_DISTANCE_KM: f64 = 0.5;

/// Graph node weight.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    /// Source identifier of the node.
    #[allow(dead_code)]
    pub(crate) id: u64,
    pub(crate) geometry: Point<f64>,
}

/// Graph edge weight: segment length in metres.
#[derive(Debug, Clone)]
pub(crate) struct GraphEdge {
    pub(crate) length_m: f64,
}

/// R-tree entry mapping a node position to its graph index.
#[derive(Debug, Clone)]
struct IndexedPoint {
    position: [f64; 2],
    node: NodeIndex,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// A shortest path through the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPath {
    pub length_km: f64,
    /// Node positions along the path, snapped start and end included.
    pub points: Vec<(f64, f64)>,
}

/// A routable network for one region and travel mode.
pub struct NetworkGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    index: RTree<IndexedPoint>,
}

impl NetworkGraph {
    /// Builds the graph and its spatial index from raw collaborator data.
    ///
    /// Bidirectional segments are inserted in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphBuild`] on edges referencing unknown node ids
    /// or non-finite segment lengths.
    pub fn from_data(data: NetworkData) -> Result<Self, Error> {
        let mut graph = DiGraph::with_capacity(data.nodes.len(), data.edges.len());
        let mut node_indices: HashMap<u64, NodeIndex> = HashMap::with_capacity(data.nodes.len());

        for node in data.nodes {
            let index = graph.add_node(GraphNode {
                id: node.id,
                geometry: node.coordinate.point(),
            });
            node_indices.insert(node.id, index);
        }

        for edge in data.edges {
            if !edge.length_m.is_finite() || edge.length_m < 0.0 {
                return Err(Error::GraphBuild(format!(
                    "edge {} -> {} has invalid length {}",
                    edge.from, edge.to, edge.length_m
                )));
            }
            let from = *node_indices.get(&edge.from).ok_or_else(|| {
                Error::GraphBuild(format!("edge references unknown node {}", edge.from))
            })?;
            let to = *node_indices.get(&edge.to).ok_or_else(|| {
                Error::GraphBuild(format!("edge references unknown node {}", edge.to))
            })?;
            graph.add_edge(
                from,
                to,
                GraphEdge {
                    length_m: edge.length_m,
                },
            );
            if !edge.one_way {
                graph.add_edge(
                    to,
                    from,
                    GraphEdge {
                        length_m: edge.length_m,
                    },
                );
            }
        }

        let index = RTree::bulk_load(
            graph
                .node_indices()
                .map(|node| IndexedPoint {
                    position: [graph[node].geometry.x(), graph[node].geometry.y()],
                    node,
                })
                .collect(),
        );

        Ok(Self { graph, index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nearest graph node to `coordinate`, within [`MAX_SNAP_DISTANCE_KM`].
    fn snap(&self, coordinate: Coordinate) -> Result<NodeIndex, Error> {
        let query = [coordinate.lon(), coordinate.lat()];
        let nearest = self.index.nearest_neighbor(&query).ok_or_else(|| {
            Error::RouteUnavailable("network graph contains no nodes".to_string())
        })?;

        let node = nearest.node;
        let offset_km = haversine_km(coordinate.point(), self.graph[node].geometry);
        if offset_km > MAX_SNAP_DISTANCE_KM {
            return Err(Error::RouteUnavailable(format!(
                "coordinate {coordinate} is {offset_km:.2} km from the nearest network node"
            )));
        }
        Ok(node)
    }

    /// Shortest weighted path between two coordinates.
    ///
    /// Both endpoints are snapped to their nearest graph node first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteUnavailable`] when an endpoint cannot be
    /// snapped or the snapped nodes are not connected.
    pub fn shortest_path(&self, from: Coordinate, to: Coordinate) -> Result<NetworkPath, Error> {
        let start = self.snap(from)?;
        let end = self.snap(to)?;

        let (length_m, nodes) = shortest_path_weights(&self.graph, start, end).ok_or_else(|| {
            Error::RouteUnavailable(format!("no path between {from} and {to}"))
        })?;

        let points = nodes
            .into_iter()
            .map(|node| {
                let geometry = self.graph[node].geometry;
                (geometry.y(), geometry.x())
            })
            .collect();

        Ok(NetworkPath {
            length_km: f64::from(length_m) / 1000.0,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::source::{NetworkEdge, NetworkNode};

    fn node(id: u64, lat: f64, lon: f64) -> NetworkNode {
        NetworkNode {
            id,
            coordinate: Coordinate::new(lat, lon).unwrap(),
        }
    }

    fn edge(from: u64, to: u64, length_m: f64) -> NetworkEdge {
        NetworkEdge {
            from,
            to,
            length_m,
            one_way: false,
        }
    }

    // Three nodes on a line, 0.001 degrees of longitude apart at the
    // equator (roughly 111 m), with explicit segment lengths.
    fn line_network() -> NetworkData {
        NetworkData {
            nodes: vec![
                node(1, 0.0, 0.0),
                node(2, 0.0, 0.001),
                node(3, 0.0, 0.002),
            ],
            edges: vec![edge(1, 2, 120.0), edge(2, 3, 130.0)],
        }
    }

    fn coordinate(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn builds_bidirectional_edges() {
        let graph = NetworkGraph::from_data(line_network()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn rejects_unknown_edge_endpoint() {
        let mut data = line_network();
        data.edges.push(edge(1, 99, 10.0));
        assert!(matches!(
            NetworkGraph::from_data(data),
            Err(Error::GraphBuild(_))
        ));
    }

    #[test]
    fn rejects_invalid_edge_length() {
        let mut data = line_network();
        data.edges.push(edge(1, 3, f64::NAN));
        assert!(matches!(
            NetworkGraph::from_data(data),
            Err(Error::GraphBuild(_))
        ));
    }

    #[test]
    fn shortest_path_sums_segment_lengths() {
        let graph = NetworkGraph::from_data(line_network()).unwrap();
        let path = graph
            .shortest_path(coordinate(0.0, 0.0), coordinate(0.0, 0.002))
            .unwrap();
        assert!((path.length_km - 0.25).abs() < 1e-9);
        assert_eq!(path.points.len(), 3);
    }

    #[test]
    fn same_snapped_node_yields_zero_length() {
        let graph = NetworkGraph::from_data(line_network()).unwrap();
        let path = graph
            .shortest_path(coordinate(0.0, 0.0), coordinate(0.0, 0.0))
            .unwrap();
        assert_eq!(path.length_km, 0.0);
    }

    #[test]
    fn snapping_fails_beyond_extent() {
        let graph = NetworkGraph::from_data(line_network()).unwrap();
        let result = graph.shortest_path(coordinate(10.0, 10.0), coordinate(0.0, 0.0));
        assert!(matches!(result, Err(Error::RouteUnavailable(_))));
    }

    #[test]
    fn one_way_edges_block_the_reverse_direction() {
        let data = NetworkData {
            nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 0.001)],
            edges: vec![NetworkEdge {
                from: 1,
                to: 2,
                length_m: 120.0,
                one_way: true,
            }],
        };
        let graph = NetworkGraph::from_data(data).unwrap();
        assert!(
            graph
                .shortest_path(coordinate(0.0, 0.0), coordinate(0.0, 0.001))
                .is_ok()
        );
        assert!(matches!(
            graph.shortest_path(coordinate(0.0, 0.001), coordinate(0.0, 0.0)),
            Err(Error::RouteUnavailable(_))
        ));
    }
}
