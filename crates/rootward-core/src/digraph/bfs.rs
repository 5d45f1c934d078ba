//! Multi-source breadth-first distance labeling.
//!
//! One labeling answers "how far is every vertex from the nearest member of
//! a seed set, following edges forward". The ancestral-path engine runs two
//! of these per query, one per argument set.

use std::collections::VecDeque;

use super::adjacency::{Digraph, VertexId};
use crate::error::{Error, Result};

/// Shortest hop counts from a seed set to every reachable vertex.
///
/// Produced by one breadth-first search seeded from every vertex of the set
/// simultaneously. Vertices never reached have no distance. Parent links
/// are kept so one shortest path per vertex can be reconstructed.
///
/// # Example
///
/// ```rust
/// use rootward_core::digraph::{BreadthFirstDistances, Digraph};
///
/// let mut graph = Digraph::new(4);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// let distances = BreadthFirstDistances::from_sources(&graph, &[0]).unwrap();
/// assert_eq!(distances.dist_to(2), Some(2));
/// assert_eq!(distances.dist_to(3), None);
/// ```
#[derive(Debug, Clone)]
pub struct BreadthFirstDistances {
    distance: Vec<Option<usize>>,
    parent: Vec<Option<VertexId>>,
}

impl BreadthFirstDistances {
    /// Runs a breadth-first search seeded from every vertex in `sources`.
    ///
    /// All seeds start at distance 0. Duplicate seeds are harmless; an
    /// empty seed set labels nothing. Cost O(V + E).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if any seed is out of range.
    pub fn from_sources(graph: &Digraph, sources: &[VertexId]) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        let mut distance = vec![None; vertex_count];
        let mut parent = vec![None; vertex_count];
        let mut queue = VecDeque::new();

        for &s in sources {
            if s >= vertex_count {
                return Err(Error::InvalidVertex {
                    vertex: s,
                    vertex_count,
                });
            }
            if distance[s].is_none() {
                distance[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let Some(dist_v) = distance[v] else {
                continue;
            };
            for &w in graph.neighbors(v) {
                if distance[w].is_none() {
                    distance[w] = Some(dist_v + 1);
                    parent[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        Ok(Self { distance, parent })
    }

    /// Whether `v` is reachable from the seed set. Out-of-range ids are
    /// simply unreachable.
    #[must_use]
    pub fn has_path_to(&self, v: VertexId) -> bool {
        self.dist_to(v).is_some()
    }

    /// Minimum hop count from the nearest seed to `v`, or `None` when `v`
    /// is unreached or out of range.
    #[must_use]
    pub fn dist_to(&self, v: VertexId) -> Option<usize> {
        self.distance.get(v).copied().flatten()
    }

    /// One shortest path from the nearest seed to `v`, seed first, or
    /// `None` when `v` is unreached.
    #[must_use]
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        self.dist_to(v)?;
        let mut path = vec![v];
        let mut current = v;
        while let Some(prev) = self.parent[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}
