use proptest::{collection::vec, prelude::*};

use crate::{core::EdgeKind, graph::Graph};

/// Strategy generating graphs with vertices `0..n` for `n` up to `max_size`
/// and random weighted edges between them, self-loops included.
///
/// Vertices are added in ascending order and edges in the generated order,
/// so the traversal order of a generated graph is deterministic.
pub fn graph(kind: EdgeKind, max_size: usize) -> impl Strategy<Value = Graph<u32, i64>> {
    (0..=max_size).prop_flat_map(move |size| {
        // Keep the endpoint range non-empty, for zero vertices no edge is
        // generated anyway.
        let bound = size.max(1) as u32;
        let edge = (0..bound, 0..bound, -100i64..100);

        vec(edge, 0..=3 * size).prop_map(move |edges| {
            let mut graph = Graph::with_capacity(kind, size);

            graph
                .extend_with_vertices(0..size as u32)
                .and_then(|graph| graph.extend_with_weighted_edges(edges))
                .expect("endpoints exist");

            graph
        })
    })
}
