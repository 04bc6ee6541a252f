//! A* shortest-path search over generic weighted graphs.
//!
//! [`AStar`] binds a [`Graph`](routegraph_core::Graph) and a heuristic
//! at construction and reuses its internal bookkeeping (score map,
//! came-from map, frontier heap) across searches, so repeated queries
//! incur no fresh table allocations once warm. Callers work in terms of
//! wrapped values at the boundary; vertices and adjacency pairs stay
//! internal.
//!
//! Supplying a heuristic that always returns `0.0` reduces the search
//! to uniform-cost (Dijkstra) behavior.
//!
//! ```
//! use routegraph_core::Graph;
//! use routegraph_astar::AStar;
//!
//! let mut g = Graph::new();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v);
//! }
//! g.add_edge(&"a", &"b", 1.0)?;
//! g.add_edge(&"b", &"c", 1.0)?;
//! g.add_edge(&"a", &"c", 5.0)?;
//!
//! let mut astar = AStar::new(&g, |_, _| 0.0);
//! let path = astar.search(&"a", &"c")?;
//! assert_eq!(path, [&"a", &"b", &"c"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod astar;
mod engine;
mod errors;

pub use engine::{AStar, path_cost};
pub use errors::SearchError;
