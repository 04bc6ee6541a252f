use std::collections::HashMap;
use std::hash::Hash;

use crate::{GraphError, Pair, Vertex};

/// An adjacency-list weighted graph over [`Vertex`] nodes.
///
/// The graph owns its vertex set and, for every vertex, an ordered list
/// of `(neighbor, weight)` entries in edge-insertion order. Edges may be
/// added with a single symmetric weight (undirected) or two independent
/// per-direction weights (directed). Weights must be finite and
/// non-negative; a weight of exactly `0.0` marks a direction as
/// untraversable and adds no entry for it.
///
/// There is no edge removal or update-in-place: adding another edge
/// between the same endpoints accumulates a parallel entry.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    edges: HashMap<Vertex<T>, Vec<Pair<Vertex<T>, f64>>>,
}

impl<T> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Number of vertices in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Graph<T> {
    /// Insert a vertex for `value` if absent. Idempotent: inserting a
    /// value already present keeps its existing edge list.
    pub fn add_vertex(&mut self, value: T) {
        self.edges.entry(Vertex::new(value)).or_default();
    }

    /// Add an undirected edge: `weight` applies in both directions.
    ///
    /// Both endpoints must already have been added via
    /// [`add_vertex`](Self::add_vertex).
    pub fn add_edge(&mut self, left: &T, right: &T, weight: f64) -> Result<(), GraphError>
    where
        T: Clone,
    {
        self.add_edge_directed(left, right, weight, weight)
    }

    /// Add a directed edge pair with independent per-direction weights.
    ///
    /// A weight that is negative, NaN or infinite is rejected with
    /// [`GraphError::InvalidWeight`]. A weight of exactly `0.0` marks
    /// that direction untraversable: no entry is added for it.
    pub fn add_edge_directed(
        &mut self,
        left: &T,
        right: &T,
        weight_lr: f64,
        weight_rl: f64,
    ) -> Result<(), GraphError>
    where
        T: Clone,
    {
        check_weight(weight_lr)?;
        check_weight(weight_rl)?;
        if !self.contains(left) || !self.contains(right) {
            return Err(GraphError::MissingVertex);
        }
        if weight_lr > 0.0 {
            if let Some(list) = self.edges.get_mut(left) {
                list.push(Pair::new(Vertex::new(right.clone()), weight_lr));
            }
        }
        if weight_rl > 0.0 {
            if let Some(list) = self.edges.get_mut(right) {
                list.push(Pair::new(Vertex::new(left.clone()), weight_rl));
            }
        }
        Ok(())
    }

    /// Whether the graph contains a vertex for `value`. O(1) expected.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.edges.contains_key(value)
    }

    /// Whether the graph contains the given vertex. O(1) expected.
    #[inline]
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.edges.contains_key(vertex)
    }

    /// The vertex stored in the graph for `value`, if any.
    ///
    /// Returns the graph's own canonical instance, which stays valid as
    /// long as the graph is not mutated.
    #[inline]
    pub fn vertex(&self, value: &T) -> Option<&Vertex<T>> {
        self.edges.get_key_value(value).map(|(k, _)| k)
    }

    /// The `(neighbor, weight)` adjacency entries of `value`, in
    /// edge-insertion order. Empty for an isolated vertex.
    pub fn successors(&self, value: &T) -> Result<&[Pair<Vertex<T>, f64>], GraphError> {
        self.edges
            .get(value)
            .map(Vec::as_slice)
            .ok_or(GraphError::MissingVertex)
    }

    /// Iterate over all vertices currently in the graph.
    ///
    /// The iterator borrows the graph, so mutation during iteration is
    /// statically excluded. Order is unspecified.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.edges.keys()
    }
}

fn check_weight(weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::InvalidWeight(weight));
    }
    Ok(())
}
