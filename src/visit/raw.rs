use std::{collections::VecDeque, fmt, hash::Hash};

use fixedbitset::FixedBitSet;

use crate::{
    core::{GraphError, Weight},
    graph::Graph,
};

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

#[derive(Debug)]
pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) trait RawAlgo {
    type Collection: TraversalCollection<usize>;

    /// Pushes the neighbors discovered from one vertex, given in adjacency
    /// order, so that the collection pops them in that same order.
    fn push_discovered(collection: &mut Self::Collection, discovered: &[usize]);
}

pub(crate) enum RawBfs {}

impl RawAlgo for RawBfs {
    type Collection = Queue<usize>;

    fn push_discovered(collection: &mut Self::Collection, discovered: &[usize]) {
        for &position in discovered {
            collection.push(position);
        }
    }
}

pub(crate) enum RawDfs {}

impl RawAlgo for RawDfs {
    type Collection = Stack<usize>;

    fn push_discovered(collection: &mut Self::Collection, discovered: &[usize]) {
        for &position in discovered.iter().rev() {
            collection.push(position);
        }
    }
}

/// Traversal state shared by BFS and DFS.
///
/// Vertices are tracked by their registry position. The positions are stable
/// for the whole traversal, because the graph is borrowed immutably.
pub(crate) struct RawVisit<'a, V, W, A: RawAlgo> {
    graph: &'a Graph<V, W>,
    collection: A::Collection,
    // Marked on discovery, so that a vertex is never queued twice.
    visited: FixedBitSet,
    discovered: Vec<usize>,
}

impl<'a, V, W, A> RawVisit<'a, V, W, A>
where
    V: Eq + Hash + Clone,
    W: Weight,
    A: RawAlgo,
{
    pub fn new(graph: &'a Graph<V, W>, start: &V) -> Result<Self, GraphError<V>> {
        let root = graph
            .storage()
            .position(start)
            .ok_or_else(|| GraphError::VertexNotFound(start.clone()))?;

        let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
        visited.insert(root);

        let mut collection = A::Collection::default();
        collection.push(root);

        Ok(Self {
            graph,
            collection,
            visited,
            discovered: Vec::new(),
        })
    }

    pub fn has_next(&self) -> bool {
        !self.collection.is_empty()
    }

    pub fn next(&mut self) -> Option<&'a V> {
        let graph = self.graph;
        let position = self.collection.pop()?;

        self.discovered.clear();
        for neighbor in graph.storage().neighbor_positions(position) {
            // `put` returns the previous state of the bit.
            if !self.visited.put(neighbor) {
                self.discovered.push(neighbor);
            }
        }
        A::push_discovered(&mut self.collection, &self.discovered);

        Some(graph.storage().vertex(position).id())
    }

    pub fn visited_count(&self) -> usize {
        self.visited.count_ones(..)
    }
}

impl<V, W, A: RawAlgo> fmt::Debug for RawVisit<'_, V, W, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawVisit")
            .field("visited", &self.visited)
            .field("exhausted", &self.collection.is_empty())
            .finish_non_exhaustive()
    }
}
