//! Graph traversals.
//!
//! A traversal is an explicit cursor over a borrowed graph holding the set
//! of visited vertices and the frontier of discovered vertices waiting to be
//! produced. Every vertex reachable from the start vertex is produced exactly
//! once, the start vertex first. Vertices are marked as visited when they are
//! discovered, so no vertex is ever put into the frontier twice.
//!
//! * [`Bfs`] uses a queue as the frontier,
//! * [`Dfs`] uses a stack as the frontier.
//!
//! Traversals are created either directly or through an
//! [`IterationStrategy`], which lets the consumer stay independent of the
//! traversal order. They are not restartable; create a new one to traverse
//! again.
//!
//! ```
//! use pathgraph::{
//!     visit::{BfsStrategy, GraphIterator, IterationStrategy},
//!     Graph,
//! };
//!
//! let mut graph = Graph::<_, u32>::new_directed();
//! graph
//!     .extend_with_vertices([1, 2, 3, 4])
//!     .unwrap()
//!     .extend_with_edges([(1, 2), (1, 3), (3, 4)])
//!     .unwrap();
//!
//! let mut bfs = BfsStrategy.create_iterator(&graph, &1).unwrap();
//! let mut order = Vec::new();
//!
//! while bfs.has_next() {
//!     order.push(*bfs.next_vertex().unwrap());
//! }
//!
//! assert_eq!(order, vec![1, 2, 3, 4]);
//! ```

pub mod bfs;
pub mod dfs;
pub mod strategy;

pub(crate) mod raw;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::Dfs,
    strategy::{BfsStrategy, DfsStrategy, IterationStrategy},
};

use std::{hash::Hash, iter::FusedIterator};

use raw::*;

use crate::{
    core::{GraphError, Weight},
    graph::Graph,
};

/// Cursor producing vertices of a graph in a traversal order.
///
/// Every traversal is also an [`Iterator`] over references to the vertices,
/// so it composes with the standard iterator adapters.
pub trait GraphIterator<V>: Iterator {
    /// Returns `true` if there is a vertex that has not been produced yet.
    ///
    /// Once it returns `false`, it never returns `true` again.
    fn has_next(&self) -> bool;

    /// Produces the next vertex.
    ///
    /// Fails with [`GraphError::IteratorExhausted`] if
    /// [`has_next`](GraphIterator::has_next) is `false`.
    fn next_vertex(&mut self) -> Result<Self::Item, GraphError<V>> {
        self.next().ok_or(GraphError::IteratorExhausted)
    }
}
