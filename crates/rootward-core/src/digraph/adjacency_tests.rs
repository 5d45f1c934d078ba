//! Tests for the adjacency-list snapshot and the `GraphSource` seam.

use super::adjacency::{Digraph, GraphSource, VertexId};
use crate::error::Error;

/// Build the example graph: 0 → 2, 1 → 2, 2 → 3.
fn build_small_graph() -> Digraph {
    let mut graph = Digraph::new(4);
    graph.add_edge(0, 2).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 3).unwrap();
    graph
}

// ── Construction ───────────────────────────────────────────────────

#[test]
fn test_new_graph_is_empty() {
    let graph = Digraph::new(5);
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 0);
    for v in 0..5 {
        assert!(graph.successors(v).unwrap().is_empty());
    }
}

#[test]
fn test_zero_vertex_graph() {
    let graph = Digraph::new(0);
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(
        graph.successors(0),
        Err(Error::InvalidVertex {
            vertex: 0,
            vertex_count: 0
        })
    );
}

#[test]
fn test_add_edge_counts_and_order() {
    let graph = build_small_graph();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.successors(0).unwrap(), &[2]);
    assert_eq!(graph.successors(2).unwrap(), &[3]);
}

#[test]
fn test_add_edge_keeps_insertion_order() {
    let mut graph = Digraph::new(4);
    graph.add_edge(0, 3).unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 2).unwrap();
    assert_eq!(graph.successors(0).unwrap(), &[3, 1, 2]);
}

#[test]
fn test_duplicate_edges_and_self_loops_allowed() {
    let mut graph = Digraph::new(2);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 1).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.successors(0).unwrap(), &[1, 1]);
    assert_eq!(graph.successors(1).unwrap(), &[1]);
}

#[test]
fn test_add_edge_out_of_range() {
    let mut graph = Digraph::new(3);
    assert_eq!(
        graph.add_edge(0, 3),
        Err(Error::InvalidVertex {
            vertex: 3,
            vertex_count: 3
        })
    );
    assert_eq!(
        graph.add_edge(5, 0),
        Err(Error::InvalidVertex {
            vertex: 5,
            vertex_count: 3
        })
    );
    // Failed adds leave no partial state.
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_successors_out_of_range() {
    let graph = build_small_graph();
    assert!(graph.successors(4).is_err());
    assert!(graph.out_degree(17).is_err());
}

#[test]
fn test_out_degree() {
    let graph = build_small_graph();
    assert_eq!(graph.out_degree(0).unwrap(), 1);
    assert_eq!(graph.out_degree(3).unwrap(), 0);
}

// ── Snapshot semantics ─────────────────────────────────────────────

#[test]
fn test_snapshot_copies_structure() {
    let graph = build_small_graph();
    let snapshot = Digraph::snapshot_of(&graph).unwrap();
    assert_eq!(snapshot, graph);
}

#[test]
fn test_snapshot_is_isolated_from_source_mutation() {
    let mut graph = build_small_graph();
    let snapshot = Digraph::snapshot_of(&graph).unwrap();

    graph.add_edge(3, 0).unwrap();

    assert_eq!(snapshot.edge_count(), 3);
    assert!(snapshot.successors(3).unwrap().is_empty());
}

/// A caller-owned graph shape that is not a `Digraph`.
struct ChainOfThree;

impl GraphSource for ChainOfThree {
    fn vertex_count(&self) -> usize {
        3
    }

    fn outgoing(&self, v: VertexId) -> crate::error::Result<Vec<VertexId>> {
        Ok(if v + 1 < 3 { vec![v + 1] } else { Vec::new() })
    }
}

#[test]
fn test_snapshot_of_foreign_source() {
    let snapshot = Digraph::snapshot_of(&ChainOfThree).unwrap();
    assert_eq!(snapshot.vertex_count(), 3);
    assert_eq!(snapshot.successors(0).unwrap(), &[1]);
    assert_eq!(snapshot.successors(1).unwrap(), &[2]);
    assert!(snapshot.successors(2).unwrap().is_empty());
}

/// A source reporting a successor outside its own vertex range.
struct BrokenSource;

impl GraphSource for BrokenSource {
    fn vertex_count(&self) -> usize {
        2
    }

    fn outgoing(&self, v: VertexId) -> crate::error::Result<Vec<VertexId>> {
        Ok(if v == 0 { vec![9] } else { Vec::new() })
    }
}

#[test]
fn test_snapshot_rejects_out_of_range_successor() {
    assert_eq!(
        Digraph::snapshot_of(&BrokenSource),
        Err(Error::InvalidVertex {
            vertex: 9,
            vertex_count: 2
        })
    );
}

// ── Reverse ────────────────────────────────────────────────────────

#[test]
fn test_reverse_flips_every_edge() {
    let graph = build_small_graph();
    let reversed = graph.reverse();

    assert_eq!(reversed.vertex_count(), 4);
    assert_eq!(reversed.edge_count(), 3);
    assert_eq!(reversed.successors(2).unwrap(), &[0, 1]);
    assert_eq!(reversed.successors(3).unwrap(), &[2]);
    assert!(reversed.successors(0).unwrap().is_empty());
}

#[test]
fn test_reverse_twice_restores_edges() {
    let graph = build_small_graph();
    let round_trip = graph.reverse().reverse();
    assert_eq!(round_trip.edge_count(), graph.edge_count());
    for v in 0..graph.vertex_count() {
        let mut expected = graph.successors(v).unwrap().to_vec();
        let mut actual = round_trip.successors(v).unwrap().to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }
}

// ── Serde ──────────────────────────────────────────────────────────

#[test]
fn test_serde_round_trip() {
    let graph = build_small_graph();
    let json = serde_json::to_string(&graph).unwrap();
    let restored: Digraph = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, graph);
}
