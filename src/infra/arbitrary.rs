use std::{fmt, hash::Hash};

use arbitrary::Arbitrary;

use crate::{
    core::{GraphError, Weight},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Mutation of a graph, with endpoints addressed by their position in the
/// vertex insertion order.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, W> {
    AddVertex(V),
    RemoveVertex(Index),
    Clear,
    AddEdge(Index, Index, W),
    RemoveEdge(Index, Index),
    ClearEdges,
}

impl<V, W> MutOp<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Applies the operation. Operations addressing a vertex of an empty
    /// graph are no-ops.
    pub fn apply(self, graph: &mut Graph<V, W>) -> Result<(), GraphError<V>> {
        match self {
            MutOp::AddVertex(vertex) => graph.add_vertex(vertex).map(drop),
            MutOp::RemoveVertex(index) => match vertex_at(graph, index) {
                Some(vertex) => graph.remove_vertex(&vertex).map(drop),
                None => Ok(()),
            },
            MutOp::Clear => {
                graph.clear();
                Ok(())
            }
            MutOp::AddEdge(from, to, weight) => {
                match (vertex_at(graph, from), vertex_at(graph, to)) {
                    (Some(from), Some(to)) => graph.add_edge(&from, &to, weight).map(drop),
                    _ => Ok(()),
                }
            }
            MutOp::RemoveEdge(from, to) => {
                match (vertex_at(graph, from), vertex_at(graph, to)) {
                    (Some(from), Some(to)) => graph.remove_edge(&from, &to).map(drop),
                    _ => Ok(()),
                }
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                Ok(())
            }
        }
    }
}

fn vertex_at<V, W>(graph: &Graph<V, W>, index: Index) -> Option<V>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    index
        .get(graph.vertex_count())
        .and_then(|position| graph.vertices().nth(position).cloned())
}

#[derive(Arbitrary)]
pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;
    use assert_matches::assert_matches;

    use crate::{core::marker::Undirected, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn index_wraps_around() {
        assert_eq!(Index(7).get(3), Some(1));
        assert_eq!(Index(7).get(0), None);
    }

    #[test]
    fn apply_sequence() {
        let mut graph = Graph::<i8, i8>::new(Undirected);

        let ops = MutOpsSeq(vec![
            MutOp::AddVertex(3),
            MutOp::AddVertex(5),
            MutOp::AddVertex(3),
            MutOp::AddEdge(Index(0), Index(3), 2),
            MutOp::AddEdge(Index(1), Index(1), 4),
            MutOp::RemoveEdge(Index(0), Index(0)),
            MutOp::RemoveVertex(Index(2)),
        ]);

        let results = ops
            .into_iter()
            .map(|op| op.apply(&mut graph))
            .collect::<Vec<_>>();

        assert_matches!(results[2], Err(GraphError::DuplicateVertex(3)));
        assert_matches!(results[5], Err(GraphError::EdgeNotFound { from: 3, to: 3 }));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![5]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn arbitrary_ops_keep_graph_consistent() {
        let bytes = (0..=255u8).cycle().take(2048).collect::<Vec<_>>();
        let mut u = Unstructured::new(&bytes);

        let ops = MutOpsSeq::<i8, i8>::arbitrary(&mut u).unwrap();
        let mut graph = Graph::new(Undirected);

        for op in ops {
            let _ = op.apply(&mut graph);
            assert_eq!(check_consistency(&graph), Ok(()));
        }
    }
}
