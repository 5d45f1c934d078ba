//! Shortest-ancestral-path queries over a directed graph.
//!
//! An ancestral path between two vertex sets runs from a member of one set
//! to a member of the other through a *common ancestor*, a vertex
//! forward-reachable from both sides. [`ShortestAncestralPath`] answers
//! "how long is the shortest such path, and through which ancestor" for
//! arbitrary directed graphs, cycles included.
//!
//! The engine snapshots the graph and precomputes one visitation order at
//! construction; each query then costs two multi-source breadth-first
//! searches plus a linear scan, O(V + E).
//!
//! # Example
//!
//! ```rust
//! use rootward_core::{Digraph, ShortestAncestralPath};
//!
//! // 0 -> 2 <- 1, 2 -> 3
//! let mut graph = Digraph::new(4);
//! graph.add_edge(0, 2).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! let sap = ShortestAncestralPath::new(&graph).unwrap();
//! assert_eq!(sap.length(0, 1).unwrap(), Some(2));
//! assert_eq!(sap.ancestor(0, 1).unwrap(), Some(2));
//! ```

use serde::{Deserialize, Serialize};

use crate::digraph::{BreadthFirstDistances, DepthFirstOrder, Digraph, GraphSource, VertexId};
use crate::error::{Error, Result};

/// A common ancestor participating in a shortest ancestral path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAncestor {
    /// The ancestor vertex, forward-reachable from both argument sets.
    pub vertex: VertexId,
    /// Combined hop count: nearest source to `vertex` plus nearest target
    /// to `vertex`.
    pub distance: usize,
}

/// Shortest-ancestral-path engine over an immutable graph snapshot.
///
/// Construction takes a defensive copy of the supplied graph and computes
/// a fixed visitation order once; both live for the engine's lifetime and
/// are never mutated afterwards, so a single engine can serve concurrent
/// queries without locking.
#[derive(Debug, Clone)]
pub struct ShortestAncestralPath {
    graph: Digraph,
    visitation_order: Vec<VertexId>,
}

impl ShortestAncestralPath {
    /// Builds an engine over a snapshot of `source`.
    ///
    /// The input need not be acyclic; no DAG-only assumption is made
    /// anywhere in the engine.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if the source reports a successor id
    /// out of range.
    pub fn new<G: GraphSource + ?Sized>(source: &G) -> Result<Self> {
        let graph = Digraph::snapshot_of(source)?;
        let visitation_order = DepthFirstOrder::new(&graph).reverse_postorder();
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "ancestral path engine ready"
        );
        Ok(Self {
            graph,
            visitation_order,
        })
    }

    /// Returns the number of vertices in the snapshot.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// The fixed order the query scan walks candidate ancestors in.
    ///
    /// Depth-first reverse postorder of the snapshot: deterministic and
    /// covering every vertex exactly once. On cyclic input it is *not* a
    /// topological order, which is why the scan never exits early.
    #[must_use]
    pub fn visitation_order(&self) -> &[VertexId] {
        &self.visitation_order
    }

    /// Length of the shortest ancestral path between `v` and `w`, or
    /// `None` if they share no ancestor.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if either id is out of range.
    pub fn length(&self, v: VertexId, w: VertexId) -> Result<Option<usize>> {
        self.length_between(&[v], &[w])
    }

    /// A common ancestor participating in a shortest ancestral path
    /// between `v` and `w`, or `None` if they share no ancestor.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if either id is out of range.
    pub fn ancestor(&self, v: VertexId, w: VertexId) -> Result<Option<VertexId>> {
        self.ancestor_between(&[v], &[w])
    }

    /// Length of the shortest ancestral path between any vertex of
    /// `sources` and any vertex of `targets`.
    ///
    /// Empty sets are legal and yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if any id in either set is out of
    /// range.
    pub fn length_between(
        &self,
        sources: &[VertexId],
        targets: &[VertexId],
    ) -> Result<Option<usize>> {
        Ok(self
            .common_ancestor(sources, targets)?
            .map(|found| found.distance))
    }

    /// A common ancestor participating in a shortest ancestral path
    /// between any vertex of `sources` and any vertex of `targets`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if any id in either set is out of
    /// range.
    pub fn ancestor_between(
        &self,
        sources: &[VertexId],
        targets: &[VertexId],
    ) -> Result<Option<VertexId>> {
        Ok(self
            .common_ancestor(sources, targets)?
            .map(|found| found.vertex))
    }

    /// Finds the common ancestor minimizing the combined distance to both
    /// sets, together with that distance.
    ///
    /// This is the one computation [`Self::length_between`] and
    /// [`Self::ancestor_between`] both derive from; call it directly when
    /// both answers are needed, to pay for the two breadth-first searches
    /// once.
    ///
    /// Ties on distance go to the vertex encountered first in
    /// [`Self::visitation_order`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if any id in either set is out of
    /// range.
    pub fn common_ancestor(
        &self,
        sources: &[VertexId],
        targets: &[VertexId],
    ) -> Result<Option<CommonAncestor>> {
        self.check_set(sources)?;
        self.check_set(targets)?;

        let from_sources = BreadthFirstDistances::from_sources(&self.graph, sources)?;
        let from_targets = BreadthFirstDistances::from_sources(&self.graph, targets)?;

        // Full scan: the order is not monotonic in distance, so a smaller
        // candidate can appear arbitrarily late.
        let mut best: Option<CommonAncestor> = None;
        for &vertex in &self.visitation_order {
            let (Some(d_source), Some(d_target)) =
                (from_sources.dist_to(vertex), from_targets.dist_to(vertex))
            else {
                continue;
            };
            let distance = d_source + d_target;
            if best.map_or(true, |current| distance < current.distance) {
                best = Some(CommonAncestor { vertex, distance });
            }
        }

        tracing::trace!(
            sources = sources.len(),
            targets = targets.len(),
            found = best.is_some(),
            "ancestral path query"
        );
        Ok(best)
    }

    /// Validates every id in a query set before any traversal starts.
    fn check_set(&self, set: &[VertexId]) -> Result<()> {
        let vertex_count = self.vertex_count();
        for &v in set {
            if v >= vertex_count {
                return Err(Error::InvalidVertex {
                    vertex: v,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
