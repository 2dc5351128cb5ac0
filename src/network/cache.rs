//! Process-scoped cache of the built network graphs.

use std::sync::OnceLock;

use log::{info, warn};

use super::graph::{NetworkGraph, NetworkPath};
use super::source::NetworkSource;
use crate::Error;
use crate::model::{Coordinate, TravelMode};

/// Owns at most one pedestrian graph and one road graph for a single fixed
/// region, built lazily on first use.
///
/// Builds can take minutes, so each mode is constructed at most once per
/// process; concurrent callers coalesce on the per-mode `OnceLock` (the
/// first caller builds, the rest wait and reuse). A failed build is stored
/// and never retried.
pub struct NetworkGraphCache {
    region: String,
    source: Box<dyn NetworkSource>,
    walk: OnceLock<Result<NetworkGraph, String>>,
    drive: OnceLock<Result<NetworkGraph, String>>,
}

impl NetworkGraphCache {
    pub fn new(region: impl Into<String>, source: Box<dyn NetworkSource>) -> Self {
        Self {
            region: region.into(),
            source,
            walk: OnceLock::new(),
            drive: OnceLock::new(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether the graph for `mode` has been built successfully.
    pub fn is_loaded(&self, mode: TravelMode) -> bool {
        matches!(self.slot(mode).get(), Some(Ok(_)))
    }

    fn slot(&self, mode: TravelMode) -> &OnceLock<Result<NetworkGraph, String>> {
        match mode {
            TravelMode::Walk => &self.walk,
            TravelMode::Drive => &self.drive,
        }
    }

    /// Builds the graph for `mode` if it is absent; no-op afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphBuild`] when the build failed, now or on an
    /// earlier call.
    pub fn ensure_loaded(&self, mode: TravelMode) -> Result<(), Error> {
        let built = self.slot(mode).get_or_init(|| {
            info!(
                "Building {mode} network for region '{}' (this may take a while)",
                self.region
            );
            match self
                .source
                .load_network(&self.region, mode)
                .and_then(NetworkGraph::from_data)
            {
                Ok(graph) => {
                    info!(
                        "{mode} network ready: {} nodes, {} edges",
                        graph.node_count(),
                        graph.edge_count()
                    );
                    Ok(graph)
                }
                Err(err) => {
                    warn!("{mode} network build for region '{}' failed: {err}", self.region);
                    Err(err.to_string())
                }
            }
        });

        built
            .as_ref()
            .map(|_| ())
            .map_err(|message| Error::GraphBuild(message.clone()))
    }

    /// Shortest-path distance between two coordinates in `mode`.
    ///
    /// Triggers the lazy build on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteUnavailable`] when no path exists, a
    /// coordinate cannot be snapped onto the graph, or the graph failed to
    /// build (a stored build failure degrades every query in that mode).
    pub fn shortest_path_km(
        &self,
        mode: TravelMode,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<NetworkPath, Error> {
        self.ensure_loaded(mode)
            .map_err(|err| Error::RouteUnavailable(err.to_string()))?;

        match self.slot(mode).get() {
            Some(Ok(graph)) => graph.shortest_path(from, to),
            _ => Err(Error::RouteUnavailable(format!(
                "{mode} network for region '{}' is not available",
                self.region
            ))),
        }
    }
}
