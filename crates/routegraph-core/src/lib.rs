//! Data model for generic weighted-graph pathfinding.
//!
//! This crate provides the value types and the container that search
//! engines operate over:
//!
//! - [`Pair`] — ordered two-element value container, used for
//!   (neighbor, weight) adjacency entries and (f, g) cost tuples.
//! - [`Vertex`] — thin wrapper identifying a graph node by its wrapped
//!   value's own equality and hash.
//! - [`Graph`] — adjacency-list weighted graph, directed or undirected
//!   per edge, with non-negative finite weights.
//!
//! Algorithms live elsewhere (see the `routegraph-astar` crate); this
//! crate is purely the data model and its insertion-time validation.

mod errors;
mod graph;
mod pair;
mod vertex;

pub use errors::GraphError;
pub use graph::Graph;
pub use pair::Pair;
pub use vertex::Vertex;
