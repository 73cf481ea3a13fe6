use std::hash::Hash;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    core::{EdgeKind, Weight},
    graph::Graph,
};

/// Creates a path `0 - 1 - ... - (n - 1)` with unit weights.
pub fn create_path<W: Weight>(kind: EdgeKind, vertex_count: u32) -> Graph<u32, W> {
    let mut graph = Graph::with_capacity(kind, vertex_count as usize);

    graph
        .extend_with_vertices(0..vertex_count)
        .and_then(|graph| graph.extend_with_edges((1..vertex_count).map(|v| (v - 1, v))))
        .expect("endpoints exist");

    graph
}

/// Creates a complete graph on `0..n` with unit weights and no self-loops.
pub fn create_complete<W: Weight>(kind: EdgeKind, vertex_count: u32) -> Graph<u32, W> {
    let mut graph = Graph::with_capacity(kind, vertex_count as usize);

    let edges = (0..vertex_count).flat_map(|u| {
        (0..vertex_count)
            .filter(move |&v| u != v && (kind.is_directed() || u < v))
            .map(move |v| (u, v))
    });

    graph
        .extend_with_vertices(0..vertex_count)
        .and_then(|graph| graph.extend_with_edges(edges))
        .expect("endpoints exist");

    graph
}

/// Edges of a complete graph without self-loops.
pub fn complete_graph_edge_count(kind: EdgeKind, vertex_count: usize) -> usize {
    let ordered = vertex_count * vertex_count.saturating_sub(1);

    if kind.is_directed() {
        ordered
    } else {
        ordered / 2
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex at position {0} is mapped to position {1:?}")]
    PositionMismatch(usize, Option<usize>),
    #[error("vertex at position {0} has a neighbor that is not in the graph")]
    DanglingNeighbor(usize),
    #[error("vertex at position {0} has the same neighbor more than once")]
    DuplicateNeighbor(usize),
    #[error("undirected edge from position {0} to position {1} has no matching reverse entry")]
    AsymmetricEdge(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count without self-loops ({1})")]
    HandshakingLemma(usize, usize),
    #[error("edges iterator count ({0}) is not equal to adjacency matrix cell count ({1})")]
    EdgesMatrixMismatch(usize, usize),
}

/// Checks that the storage of the graph is internally consistent and that
/// the derived views agree with each other.
pub fn check_consistency<V, W>(graph: &Graph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let storage = graph.storage();

    for (position, vertex) in storage.vertices().enumerate() {
        let found = storage.position(vertex.id());
        if found != Some(position) {
            return Err(ConsistencyCheckError::PositionMismatch(position, found));
        }

        let mut seen = FxHashSet::default();
        for (neighbor, _) in vertex.neighbors() {
            if !storage.contains(neighbor) {
                return Err(ConsistencyCheckError::DanglingNeighbor(position));
            }

            if !seen.insert(neighbor) {
                return Err(ConsistencyCheckError::DuplicateNeighbor(position));
            }
        }
    }

    let edge_count = graph.edges().count();

    if !graph.is_directed() {
        let mut degree_sum = 0;
        let mut self_loops = 0;

        for (position, vertex) in storage.vertices().enumerate() {
            for (neighbor, weight) in vertex.neighbors() {
                degree_sum += 1;

                if neighbor == vertex.id() {
                    self_loops += 1;
                    continue;
                }

                let other = storage.position(neighbor).unwrap_or_default();
                if storage.weight(other, vertex.id()) != Some(weight) {
                    return Err(ConsistencyCheckError::AsymmetricEdge(position, other));
                }
            }
        }

        if degree_sum + self_loops != 2 * edge_count {
            return Err(ConsistencyCheckError::HandshakingLemma(
                degree_sum + self_loops,
                2 * edge_count,
            ));
        }
    }

    let matrix = graph.adjacency_matrix();
    let cells = matrix
        .rows()
        .flatten()
        .filter(|&cell| cell == 1)
        .count();
    let expected = if graph.is_directed() {
        cells
    } else {
        // Both halves of the symmetric matrix plus the diagonal once.
        (cells + (0..matrix.order()).filter(|&i| matrix.contains(i, i)).count()) / 2
    };

    if edge_count != expected {
        return Err(ConsistencyCheckError::EdgesMatrixMismatch(edge_count, expected));
    }

    Ok(())
}
