//! Building blocks shared by the graph, its storage and the traversals.

pub mod error;
pub mod marker;
pub mod weight;

pub use error::GraphError;
pub use marker::EdgeKind;
pub use weight::Weight;
