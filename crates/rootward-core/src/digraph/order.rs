//! Depth-first visitation orders over a digraph.
//!
//! [`DepthFirstOrder`] explores the whole graph once and records preorder
//! and postorder. Every vertex is visited exactly once; vertices with no
//! visited predecessor are started as fresh roots in ascending id order.
//! On a DAG the reverse postorder is a topological order; on a cyclic
//! graph it is still a fixed deterministic order covering every vertex,
//! which is all the ancestral-path scan relies on.

use super::adjacency::{Digraph, VertexId};

/// Preorder and postorder of a full depth-first exploration.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    preorder: Vec<VertexId>,
    postorder: Vec<VertexId>,
}

impl DepthFirstOrder {
    /// Explores `graph` depth-first from every root, recording both orders.
    ///
    /// Uses an explicit stack, so traversal depth is bounded by the vertex
    /// count without consuming call-stack space. Cost O(V + E).
    #[must_use]
    pub fn new(graph: &Digraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut preorder = Vec::with_capacity(vertex_count);
        let mut postorder = Vec::with_capacity(vertex_count);
        // (vertex, index of the next successor to consider)
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for root in 0..vertex_count {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            preorder.push(root);
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (v, next) = *frame;
                let successors = graph.neighbors(v);
                if next < successors.len() {
                    frame.1 += 1;
                    let w = successors[next];
                    if !visited[w] {
                        visited[w] = true;
                        preorder.push(w);
                        stack.push((w, 0));
                    }
                } else {
                    postorder.push(v);
                    stack.pop();
                }
            }
        }

        Self {
            preorder,
            postorder,
        }
    }

    /// Vertices in the order they were first reached.
    #[must_use]
    pub fn preorder(&self) -> &[VertexId] {
        &self.preorder
    }

    /// Vertices in the order their exploration subtrees completed.
    #[must_use]
    pub fn postorder(&self) -> &[VertexId] {
        &self.postorder
    }

    /// Postorder reversed: the visitation order the query scan uses.
    #[must_use]
    pub fn reverse_postorder(&self) -> Vec<VertexId> {
        self.postorder.iter().rev().copied().collect()
    }
}
