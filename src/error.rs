use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The network metric could not produce a distance for this pair.
    /// Non-fatal: planner and proximity search skip the candidate.
    #[error("Route unavailable: {0}")]
    RouteUnavailable(String),
    /// The region graph could not be constructed. Subsequent shortest-path
    /// queries in that mode degrade to [`Error::RouteUnavailable`].
    #[error("Network graph build failed: {0}")]
    GraphBuild(String),
    #[error("No amenities found with category '{0}'")]
    CategoryNotFound(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
