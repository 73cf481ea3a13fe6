//! Directed and undirected graphs with pluggable traversal strategies.
//!
//! ```
//! use pathgraph::{has_path, visit::BfsStrategy, Graph, GraphError};
//!
//! # fn main() -> Result<(), GraphError<&'static str>> {
//! let mut graph = Graph::<_, u32>::new_undirected();
//!
//! graph
//!     .extend_with_vertices(["Mike", "Bob", "Lisa"])?
//!     .add_edge(&"Mike", &"Bob", 5)?
//!     .add_edge(&"Bob", &"Lisa", 10)?;
//!
//! assert!(has_path(&graph, &"Mike", &"Lisa", &BfsStrategy)?);
//! assert!(matches!(
//!     has_path(&graph, &"Mike", &"Unknown", &BfsStrategy),
//!     Err(GraphError::InvalidArgument("Unknown"))
//! ));
//! # Ok(())
//! # }
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

#[doc(inline)]
pub use crate::{
    algo::has_path,
    core::{EdgeKind, GraphError, Weight},
    graph::{AdjacencyList, AdjacencyMatrix, Graph},
};

pub mod prelude {
    pub use crate::{
        core::marker::{Directed, Undirected},
        visit::{GraphIterator, IterationStrategy},
    };
}
