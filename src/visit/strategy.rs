use super::*;

/// Factory of traversals over a graph.
///
/// Code that only consumes vertices, such as [`has_path`](crate::algo::has_path),
/// takes a strategy instead of a concrete traversal, leaving the order of
/// the traversal to the caller.
pub trait IterationStrategy<V, W> {
    type Iter<'a>: GraphIterator<V, Item = &'a V>
    where
        V: 'a,
        W: 'a;

    /// Creates a new traversal of `graph` starting at `start`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `start` is not in the
    /// graph.
    fn create_iterator<'a>(
        &self,
        graph: &'a Graph<V, W>,
        start: &V,
    ) -> Result<Self::Iter<'a>, GraphError<V>>;
}

/// Strategy creating [`Bfs`] traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BfsStrategy;

impl<V, W> IterationStrategy<V, W> for BfsStrategy
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Iter<'a> = Bfs<'a, V, W>
    where
        V: 'a,
        W: 'a;

    fn create_iterator<'a>(
        &self,
        graph: &'a Graph<V, W>,
        start: &V,
    ) -> Result<Self::Iter<'a>, GraphError<V>> {
        Bfs::new(graph, start)
    }
}

/// Strategy creating [`Dfs`] traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsStrategy;

impl<V, W> IterationStrategy<V, W> for DfsStrategy
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Iter<'a> = Dfs<'a, V, W>
    where
        V: 'a,
        W: 'a;

    fn create_iterator<'a>(
        &self,
        graph: &'a Graph<V, W>,
        start: &V,
    ) -> Result<Self::Iter<'a>, GraphError<V>> {
        Dfs::new(graph, start)
    }
}
