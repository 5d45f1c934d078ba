//! Directed-graph primitives for the ancestral-path engine.
//!
//! Provides the adjacency-list snapshot, the depth-first visitation order,
//! and the multi-source breadth-first distance labeling the engine is built
//! from. All three are usable on their own.
//!
//! # Example
//!
//! ```rust
//! use rootward_core::digraph::{BreadthFirstDistances, Digraph};
//!
//! let mut graph = Digraph::new(3);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//!
//! let distances = BreadthFirstDistances::from_sources(&graph, &[0]).unwrap();
//! assert_eq!(distances.dist_to(2), Some(2));
//! ```

mod adjacency;
mod bfs;
mod order;

#[cfg(test)]
mod adjacency_tests;

pub use adjacency::{Digraph, GraphSource, VertexId};
pub use bfs::BreadthFirstDistances;
pub use order::DepthFirstOrder;
