use super::*;

/// Breadth-first traversal from a single start vertex.
///
/// The start vertex is produced first, followed by its neighbors in the
/// order the edges were added, then the neighbors of those and so on.
#[derive(Debug)]
pub struct Bfs<'a, V, W> {
    raw: RawVisit<'a, V, W, RawBfs>,
}

impl<'a, V, W> Bfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Fails with [`GraphError::VertexNotFound`] if `start` is not in the
    /// graph.
    pub fn new(graph: &'a Graph<V, W>, start: &V) -> Result<Self, GraphError<V>> {
        Ok(Self {
            raw: RawVisit::new(graph, start)?,
        })
    }

    /// Number of vertices produced or waiting in the frontier.
    pub fn visited_count(&self) -> usize {
        self.raw.visited_count()
    }
}

impl<'a, V, W> Iterator for Bfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }
}

impl<V, W> FusedIterator for Bfs<'_, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
}

impl<'a, V, W> GraphIterator<V> for Bfs<'a, V, W>
where
    V: Eq + Hash + Clone + 'a,
    W: Weight,
{
    fn has_next(&self) -> bool {
        self.raw.has_next()
    }
}
