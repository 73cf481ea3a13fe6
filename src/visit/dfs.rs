use super::*;

/// Depth-first traversal from a single start vertex.
///
/// A vertex is marked as visited when it is discovered, not when it is
/// produced. Siblings are expanded in the order their edges were added.
#[derive(Debug)]
pub struct Dfs<'a, V, W> {
    raw: RawVisit<'a, V, W, RawDfs>,
}

impl<'a, V, W> Dfs<'a, V, W>
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

impl<'a, V, W> Iterator for Dfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }
}

impl<V, W> FusedIterator for Dfs<'_, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
}

impl<'a, V, W> GraphIterator<V> for Dfs<'a, V, W>
where
    V: Eq + Hash + Clone + 'a,
    W: Weight,
{
    fn has_next(&self) -> bool {
        self.raw.has_next()
    }
}
