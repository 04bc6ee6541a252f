use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use routegraph_core::{Graph, Pair, Vertex};

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Reference into the bound graph, ordered by `f` for use in `BinaryHeap`.
///
/// `seq` is a per-search insertion counter: entries with equal `f` pop
/// in insertion order, making tie-breaking deterministic.
pub(crate) struct FrontierEntry<'g, T> {
    pub(crate) vertex: &'g Vertex<T>,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl<T> PartialEq for FrontierEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq() && self.seq == other.seq
    }
}

impl<T> Eq for FrontierEntry<'_, T> {}

impl<T> Ord for FrontierEntry<'_, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; equal
        // f falls back to smallest seq (FIFO).
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for FrontierEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// AStar
// ---------------------------------------------------------------------------

/// A reusable A* search engine bound to one [`Graph`] and one heuristic.
///
/// The engine owns its per-search bookkeeping (the (f, g) score map, the
/// came-from map and the frontier heap) and clears it at the top of
/// every [`search`](Self::search), so one instance can serve any number
/// of `(start, goal)` queries without reallocating its tables from
/// scratch. Scratch maps are keyed by references into the bound graph;
/// user data is never cloned.
///
/// The graph is held by shared borrow: it can be read by any number of
/// concurrent engines, and mutating it requires the engines to be
/// dropped first.
pub struct AStar<'g, T, H> {
    pub(crate) graph: &'g Graph<T>,
    pub(crate) heuristic: H,
    /// (f, g) per discovered vertex; an absent key reads as +inf.
    pub(crate) scores: HashMap<&'g Vertex<T>, Pair<f64, f64>>,
    pub(crate) came_from: HashMap<&'g Vertex<T>, &'g Vertex<T>>,
    pub(crate) frontier: BinaryHeap<FrontierEntry<'g, T>>,
    pub(crate) seq: u64,
}

impl<'g, T, H> AStar<'g, T, H>
where
    T: Eq + Hash,
    H: Fn(&Vertex<T>, &Vertex<T>) -> f64,
{
    /// Bind an engine to `graph` and a heuristic.
    ///
    /// The heuristic must return a non-negative finite estimate of the
    /// remaining cost between two vertices. For the returned paths to be
    /// optimal it must be admissible and consistent; the engine does not
    /// verify this, and an inadmissible heuristic degrades optimality
    /// silently rather than safety.
    pub fn new(graph: &'g Graph<T>, heuristic: H) -> Self {
        Self {
            graph,
            heuristic,
            scores: HashMap::new(),
            came_from: HashMap::new(),
            frontier: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// The graph this engine is bound to.
    #[inline]
    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    #[inline]
    pub(crate) fn h(&self, a: &Vertex<T>, b: &Vertex<T>) -> f64 {
        (self.heuristic)(a, b)
    }

    /// Clear all per-search scratch state, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.scores.clear();
        self.came_from.clear();
        self.frontier.clear();
        self.seq = 0;
    }

    pub(crate) fn push_frontier(&mut self, vertex: &'g Vertex<T>, f: f64) {
        self.frontier.push(FrontierEntry {
            vertex,
            f,
            seq: self.seq,
        });
        self.seq += 1;
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Total edge weight along `path`, taking the cheapest parallel edge
/// for each hop.
///
/// Returns `None` if some consecutive pair has no traversable edge in
/// the graph. A path of zero or one vertices costs `0.0`.
pub fn path_cost<T: Eq + Hash>(graph: &Graph<T>, path: &[&T]) -> Option<f64> {
    let mut total = 0.0;
    for hop in path.windows(2) {
        let succs = graph.successors(hop[0]).ok()?;
        let weight = succs
            .iter()
            .filter(|e| e.first.value() == hop[1])
            .map(|e| e.second)
            .min_by(f64::total_cmp)?;
        total += weight;
    }
    Some(total)
}
