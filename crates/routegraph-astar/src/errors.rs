use thiserror::Error;

/// Errors surfaced by [`AStar::search`](crate::AStar::search).
///
/// Invalid endpoints are reported before any traversal work; `NoPath`
/// only after the frontier has been fully exhausted. A successful
/// search never returns an empty path, so failure is never conflated
/// with success.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchError {
    /// The start value is not present in the bound graph.
    #[error("start vertex is not part of the graph")]
    MissingStart,

    /// The goal value is not present in the bound graph.
    #[error("goal vertex is not part of the graph")]
    MissingGoal,

    /// The frontier emptied without reaching the goal.
    #[error("no path exists between start and goal")]
    NoPath,
}
