//! # Rootward Core
//!
//! Shortest-ancestral-path engine for directed graphs.
//!
//! Given a directed graph that need not be acyclic and two sets of
//! vertices, rootward finds the shortest path from one set to the other
//! that runs through a *common ancestor* (a vertex reachable by forward
//! edges from both sides) and reports its length and a participating
//! ancestor. The primary consumer is semantic-distance scoring over
//! word-sense hierarchies, where each word maps to several hierarchy
//! entries and the distance between two words is the shortest ancestral
//! path between their entry sets.
//!
//! ## Quick Start
//!
//! ```rust
//! use rootward_core::{Digraph, ShortestAncestralPath};
//!
//! // A small hierarchy: 3 and 4 are siblings under 1; 5 hangs off 2.
//! //
//! //        0
//! //       / \
//! //      1   2
//! //     / \   \
//! //    3   4   5
//! let mut graph = Digraph::new(6);
//! for (child, parent) in [(1, 0), (2, 0), (3, 1), (4, 1), (5, 2)] {
//!     graph.add_edge(child, parent).unwrap();
//! }
//!
//! let sap = ShortestAncestralPath::new(&graph).unwrap();
//!
//! // Siblings meet at their parent, two hops apart.
//! assert_eq!(sap.length(3, 4).unwrap(), Some(2));
//! assert_eq!(sap.ancestor(3, 4).unwrap(), Some(1));
//!
//! // Cousins meet at the root.
//! assert_eq!(sap.length(3, 5).unwrap(), Some(4));
//! assert_eq!(sap.ancestor(3, 5).unwrap(), Some(0));
//!
//! // Set queries take the best pair across both sets.
//! assert_eq!(sap.length_between(&[3, 4], &[1]).unwrap(), Some(1));
//! ```
//!
//! The engine owns an immutable snapshot of the supplied graph, so it is
//! `Send + Sync` and serves concurrent queries without locking.

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod digraph;
pub mod error;
pub mod sap;

pub use digraph::{BreadthFirstDistances, DepthFirstOrder, Digraph, GraphSource, VertexId};
pub use error::{Error, Result};
pub use sap::{CommonAncestor, ShortestAncestralPath};
