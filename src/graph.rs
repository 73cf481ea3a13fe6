//! The graph type and its public contract.
//!
//! A [`Graph`] is either directed or undirected, decided by the [`EdgeKind`]
//! given at construction. The two kinds share the whole contract and differ
//! only in what adding and removing an edge does:
//!
//! * in a **directed** graph, edge `(a, b)` is a single entry `a -> b`,
//!   independent of a possible `b -> a`,
//! * in an **undirected** graph, edge `(a, b)` is stored as the pair of
//!   entries `a -> b` and `b -> a` which are always updated together.
//!
//! Mutating methods return `&mut Self`, so that they can be chained with
//! `?`:
//!
//! ```
//! use pathgraph::{Graph, GraphError};
//!
//! # fn main() -> Result<(), GraphError<&'static str>> {
//! let mut graph = Graph::<_, u32>::new_undirected();
//!
//! graph
//!     .add_vertex("Mike")?
//!     .add_vertex("Bob")?
//!     .add_vertex("Lisa")?
//!     .add_edge(&"Mike", &"Bob", 5)?
//!     .add_edge(&"Bob", &"Lisa", 10)?;
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.weight(), 15);
//! assert!(graph.has_edge(&"Lisa", &"Bob"));
//! # Ok(())
//! # }
//! ```

use std::{fmt, hash::Hash};

use tracing::trace;

use crate::{
    core::{EdgeKind, GraphError, Weight},
    storage::AdjList,
};

mod adjacency;

pub use adjacency::{AdjacencyList, AdjacencyMatrix};

type Connect<V, W> = fn(&mut AdjList<V, W>, usize, usize, W);
type Disconnect<V, W> = fn(&mut AdjList<V, W>, usize, usize) -> Option<W>;

/// Edge primitives of one edge kind, resolved once when the graph is created.
struct EdgeOps<V, W> {
    connect: Connect<V, W>,
    disconnect: Disconnect<V, W>,
}

impl<V, W> EdgeOps<V, W>
where
    V: Eq + Hash + Clone,
    W: Clone,
{
    fn of(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::Directed => Self {
                connect: connect_directed,
                disconnect: disconnect_directed,
            },
            EdgeKind::Undirected => Self {
                connect: connect_undirected,
                disconnect: disconnect_undirected,
            },
        }
    }
}

// Function pointers are `Copy` regardless of the vertex and weight types.
impl<V, W> Clone for EdgeOps<V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W> Copy for EdgeOps<V, W> {}

impl<V, W> fmt::Debug for EdgeOps<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeOps").finish_non_exhaustive()
    }
}

fn connect_directed<V, W>(storage: &mut AdjList<V, W>, from: usize, to: usize, weight: W)
where
    V: Eq + Hash + Clone,
{
    storage.connect(from, to, weight);
}

fn disconnect_directed<V, W>(storage: &mut AdjList<V, W>, from: usize, to: usize) -> Option<W>
where
    V: Eq + Hash + Clone,
{
    storage.disconnect(from, to)
}

fn connect_undirected<V, W>(storage: &mut AdjList<V, W>, from: usize, to: usize, weight: W)
where
    V: Eq + Hash + Clone,
    W: Clone,
{
    // A self-loop is a single entry.
    if from != to {
        storage.connect(to, from, weight.clone());
    }
    storage.connect(from, to, weight);
}

fn disconnect_undirected<V, W>(storage: &mut AdjList<V, W>, from: usize, to: usize) -> Option<W>
where
    V: Eq + Hash + Clone,
{
    let weight = storage.disconnect(from, to)?;
    if from != to {
        storage.disconnect(to, from);
    }
    Some(weight)
}

/// Weighted graph over vertices of type `V` with edge weights of type `W`.
///
/// Vertices are identified by value and kept in insertion order, which is
/// also the order used by [`vertices`](Graph::vertices), the
/// [adjacency list](Graph::adjacency_list) and the row/column order of the
/// [adjacency matrix](Graph::adjacency_matrix). Neighbors of a vertex are
/// kept in the order in which the edges were added.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    storage: AdjList<V, W>,
    kind: EdgeKind,
    ops: EdgeOps<V, W>,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn new(kind: EdgeKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    pub fn new_directed() -> Self {
        Self::new(EdgeKind::Directed)
    }

    pub fn new_undirected() -> Self {
        Self::new(EdgeKind::Undirected)
    }

    pub fn with_capacity(kind: EdgeKind, vertex_capacity: usize) -> Self {
        Self {
            storage: AdjList::with_capacity(vertex_capacity),
            kind,
            ops: EdgeOps::of(kind),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the vertices in the order they were added.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.storage.vertices().map(|vertex| vertex.id())
    }

    /// Returns every edge exactly once as `(from, to, weight)`.
    ///
    /// An undirected edge is reported in the orientation where `from` was
    /// added to the graph before `to`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        let directed = self.is_directed();

        self.storage
            .vertices()
            .enumerate()
            .flat_map(move |(position, vertex)| {
                vertex
                    .neighbors()
                    .iter()
                    .filter(move |(neighbor, _)| {
                        directed
                            || self
                                .storage
                                .position(neighbor)
                                .map_or(false, |other| position <= other)
                    })
                    .map(move |(neighbor, weight)| (vertex.id(), neighbor, weight))
            })
    }

    /// Returns the number of edges, counting an undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns the sum of the weights of all edges, counting an undirected
    /// edge once.
    pub fn weight(&self) -> W {
        self.edges()
            .fold(W::zero(), |total, (_, _, weight)| total + weight.clone())
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.storage.contains(vertex)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.storage
            .position(from)
            .map_or(false, |from| self.storage.weight(from, to).is_some())
    }

    /// Registers a new vertex.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if an equal vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<&mut Self, GraphError<V>> {
        if self.storage.contains(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }

        self.storage.add_vertex(vertex);
        trace!(
            kind = self.kind.name(),
            vertex_count = self.vertex_count(),
            "added vertex"
        );

        Ok(self)
    }

    /// Removes the vertex together with all edges incident to it, in both
    /// directions.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<&mut Self, GraphError<V>> {
        let position = self.require(vertex)?;

        self.storage.remove_vertex(position);
        trace!(
            kind = self.kind.name(),
            vertex_count = self.vertex_count(),
            "removed vertex"
        );

        Ok(self)
    }

    /// Adds an edge with given weight, or overwrites the weight if the edge
    /// already exists.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if any of the endpoints is
    /// not in the graph.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<&mut Self, GraphError<V>> {
        let from = self.require(from)?;
        let to = self.require(to)?;

        (self.ops.connect)(&mut self.storage, from, to, weight);
        trace!(kind = self.kind.name(), from, to, "added edge");

        Ok(self)
    }

    /// Adds an edge with the unit weight.
    pub fn add_unit_edge(&mut self, from: &V, to: &V) -> Result<&mut Self, GraphError<V>> {
        self.add_edge(from, to, W::one())
    }

    /// Removes the edge going from `from` to `to`. In an undirected graph,
    /// the opposite direction is removed as well.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if any of the endpoints is
    /// not in the graph and with [`GraphError::EdgeNotFound`] if there is no
    /// such edge.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<&mut Self, GraphError<V>> {
        let from_position = self.require(from)?;
        let to_position = self.require(to)?;

        (self.ops.disconnect)(&mut self.storage, from_position, to_position).ok_or_else(
            || GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            },
        )?;
        trace!(
            kind = self.kind.name(),
            from = from_position,
            to = to_position,
            "removed edge"
        );

        Ok(self)
    }

    /// Returns the neighbors of the vertex in the order the edges were added.
    pub fn vertex_neighbors(
        &self,
        vertex: &V,
    ) -> Result<impl ExactSizeIterator<Item = &V> + '_, GraphError<V>> {
        let position = self.require(vertex)?;

        Ok(self
            .storage
            .vertex(position)
            .neighbors()
            .iter()
            .map(|(neighbor, _)| neighbor))
    }

    /// Returns the weight of the edge going from `from` to `to`.
    pub fn edge_weight(&self, from: &V, to: &V) -> Result<&W, GraphError<V>> {
        self.storage
            .position(from)
            .and_then(|position| self.storage.weight(position, to))
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Returns every vertex mapped to its neighbors.
    pub fn adjacency_list(&self) -> AdjacencyList<V> {
        self.storage
            .vertices()
            .map(|vertex| {
                let neighbors = vertex
                    .neighbors()
                    .iter()
                    .map(|(neighbor, _)| neighbor.clone())
                    .collect();
                (vertex.id().clone(), neighbors)
            })
            .collect()
    }

    /// Returns the presence matrix of the edges, indexed by the vertex
    /// insertion order.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(self.vertex_count());

        for row in 0..self.vertex_count() {
            for col in self.storage.neighbor_positions(row) {
                matrix.insert(row, col);
            }
        }

        matrix
    }

    /// Adds all vertices in order, stopping at the first failure.
    pub fn extend_with_vertices<I>(&mut self, iter: I) -> Result<&mut Self, GraphError<V>>
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in iter {
            self.add_vertex(vertex)?;
        }

        Ok(self)
    }

    /// Adds all edges with the unit weight, stopping at the first failure.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<&mut Self, GraphError<V>>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in iter {
            self.add_unit_edge(&from, &to)?;
        }

        Ok(self)
    }

    /// Adds all weighted edges, stopping at the first failure.
    pub fn extend_with_weighted_edges<I>(&mut self, iter: I) -> Result<&mut Self, GraphError<V>>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (from, to, weight) in iter {
            self.add_edge(&from, &to, weight)?;
        }

        Ok(self)
    }

    /// Removes all edges, keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.storage.clear_edges();
        trace!(kind = self.kind.name(), "cleared edges");
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.storage.clear();
        trace!(kind = self.kind.name(), "cleared graph");
    }

    pub(crate) fn storage(&self) -> &AdjList<V, W> {
        &self.storage
    }

    fn require(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.storage
            .position(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    fn default() -> Self {
        Self::new_directed()
    }
}
