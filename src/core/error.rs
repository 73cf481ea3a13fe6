use thiserror::Error;

/// Error returned by fallible graph, traversal and path query operations.
///
/// Every error is raised before any mutation takes place, so a failed call
/// leaves the graph untouched. Variants carry the offending vertices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V> {
    /// The vertex is already registered in the graph.
    #[error("vertex {0:?} already exists")]
    DuplicateVertex(V),

    /// The vertex is not registered in the graph.
    #[error("vertex {0:?} does not exist")]
    VertexNotFound(V),

    /// There is no edge going from `from` to `to`.
    #[error("edge from {from:?} to {to:?} does not exist")]
    EdgeNotFound { from: V, to: V },

    /// A query was given a vertex that is not part of the graph.
    #[error("invalid argument: vertex {0:?} is not in the graph")]
    InvalidArgument(V),

    /// The traversal has already produced all reachable vertices.
    #[error("traversal is exhausted")]
    IteratorExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_vertices() {
        assert_eq!(
            GraphError::DuplicateVertex("Mike").to_string(),
            "vertex \"Mike\" already exists"
        );
        assert_eq!(
            GraphError::EdgeNotFound { from: 1, to: 2 }.to_string(),
            "edge from 1 to 2 does not exist"
        );
        assert_eq!(
            GraphError::<u32>::IteratorExhausted.to_string(),
            "traversal is exhausted"
        );
    }
}
