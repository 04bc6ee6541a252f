use thiserror::Error;

/// Errors reported by [`Graph`](crate::Graph) insertion and queries.
///
/// All variants are local, recoverable conditions; none of them should
/// be treated as fatal by callers.
#[derive(Error, Copy, Clone, PartialEq, Debug)]
pub enum GraphError {
    /// An edge referenced a value never added via `add_vertex`.
    #[error("edge endpoint has not been added to the graph")]
    MissingVertex,

    /// A traversable direction was given a negative or non-finite weight.
    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}
