use std::hash::Hash;

use routegraph_core::{Pair, Vertex};

use crate::AStar;
use crate::errors::SearchError;

impl<'g, T, H> AStar<'g, T, H>
where
    T: Eq + Hash,
    H: Fn(&Vertex<T>, &Vertex<T>) -> f64,
{
    /// Compute the cheapest path from `start` to `goal`.
    ///
    /// Returns the full path of wrapped values, both endpoints included.
    /// Endpoints absent from the graph fail with
    /// [`SearchError::MissingStart`] / [`SearchError::MissingGoal`]
    /// before any traversal; an exhausted frontier fails with
    /// [`SearchError::NoPath`].
    ///
    /// Ties on f are broken by frontier insertion order, so results are
    /// reproducible for a given graph construction order.
    pub fn search(&mut self, start: &T, goal: &T) -> Result<Vec<&'g T>, SearchError> {
        let graph = self.graph;
        let start_v = graph.vertex(start).ok_or(SearchError::MissingStart)?;
        let goal_v = graph.vertex(goal).ok_or(SearchError::MissingGoal)?;

        if start_v == goal_v {
            return Ok(vec![start_v.value()]);
        }

        // Clear scratch from previous runs, keeping allocations.
        self.reset();

        let f0 = self.h(start_v, goal_v);
        self.scores.insert(start_v, Pair::new(f0, 0.0));
        self.push_frontier(start_v, f0);

        let mut expanded: u64 = 0;

        while let Some(entry) = self.frontier.pop() {
            let current = entry.vertex;
            let Some(&Pair {
                first: cur_f,
                second: cur_g,
            }) = self.scores.get(current)
            else {
                continue;
            };
            // Skip entries superseded by a later relaxation.
            if entry.f > cur_f {
                continue;
            }

            if current == goal_v {
                let path = self.build_path(current);
                log::trace!(
                    "path found: len={} cost={} expanded={}",
                    path.len(),
                    cur_g,
                    expanded
                );
                return Ok(path);
            }

            expanded += 1;

            for edge in graph.successors(current.value()).unwrap_or_default() {
                let neighbor = &edge.first;
                let tentative_g = cur_g + edge.second;
                let known_g = self
                    .scores
                    .get(neighbor)
                    .map_or(f64::INFINITY, |c| c.second);
                if tentative_g < known_g {
                    self.came_from.insert(neighbor, current);
                    let f = tentative_g + self.h(neighbor, goal_v);
                    self.scores.insert(neighbor, Pair::new(f, tentative_g));
                    self.push_frontier(neighbor, f);
                }
            }
        }

        log::debug!("frontier exhausted after {expanded} expansions, no path");
        Err(SearchError::NoPath)
    }

    /// Walk the came-from map back from `goal` and return the ordered
    /// start-to-goal sequence of wrapped values.
    fn build_path(&self, goal: &'g Vertex<T>) -> Vec<&'g T> {
        let mut path = vec![goal.value()];
        let mut cur = goal;
        while let Some(&parent) = self.came_from.get(cur) {
            path.push(parent.value());
            cur = parent;
        }
        path.reverse();
        path
    }
}
