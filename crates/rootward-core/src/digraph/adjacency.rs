//! Adjacency-list digraph snapshot and the [`GraphSource`] seam.
//!
//! The engine never traverses a caller-owned graph directly. Whatever type
//! the caller keeps its graph in, it exposes the shape through
//! [`GraphSource`], and [`Digraph::snapshot_of`] takes a full structural
//! copy. Later mutation of the caller's graph cannot change query results.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A vertex id, dense in `[0, vertex_count)`.
pub type VertexId = usize;

/// Read access to an externally owned directed graph.
///
/// Implement this for the collaborator's graph type to feed it to
/// [`crate::ShortestAncestralPath`]. [`Digraph`] implements it too, so a
/// snapshot can seed another snapshot.
pub trait GraphSource {
    /// Number of vertices; ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Outgoing neighbors of `v`, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if `v` is out of range.
    fn outgoing(&self, v: VertexId) -> Result<Vec<VertexId>>;
}

/// Immutable adjacency-list representation of a directed graph.
///
/// Vertices are dense ids in `[0, vertex_count)`. Successor lists keep
/// insertion order; duplicate edges and self-loops are permitted. The only
/// structural invariant is that every successor id is in range.
///
/// # Example
///
/// ```rust
/// use rootward_core::digraph::Digraph;
///
/// let mut graph = Digraph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(0, 2).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.successors(0).unwrap(), &[1, 2]);
/// assert_eq!(graph.out_degree(1).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Takes a full structural copy of an external graph.
    ///
    /// The copy owns its adjacency lists; mutating `source` afterwards has
    /// no effect on the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if the source reports a successor id
    /// outside `[0, vertex_count)`.
    pub fn snapshot_of<G: GraphSource + ?Sized>(source: &G) -> Result<Self> {
        let vertex_count = source.vertex_count();
        let mut graph = Self::new(vertex_count);
        for v in 0..vertex_count {
            for w in source.outgoing(v)? {
                graph.add_edge(v, w)?;
            }
        }
        Ok(graph)
    }

    /// Adds the directed edge `v -> w`.
    ///
    /// Duplicates and self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if either endpoint is out of range.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.adjacency[v].push(w);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the outgoing neighbors of `v` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if `v` is out of range.
    pub fn successors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Returns the out-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertex` if `v` is out of range.
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Returns a copy of this graph with every edge reversed.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for (v, successors) in self.adjacency.iter().enumerate() {
            for &w in successors {
                reversed.adjacency[w].push(v);
            }
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    /// Neighbor access for in-crate traversals over already-validated ids.
    pub(crate) fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.vertex_count() {
            return Err(Error::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

impl GraphSource for Digraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn outgoing(&self, v: VertexId) -> Result<Vec<VertexId>> {
        self.successors(v).map(<[VertexId]>::to_vec)
    }
}
