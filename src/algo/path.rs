use std::hash::Hash;

use tracing::debug;

use crate::{
    core::{GraphError, Weight},
    graph::Graph,
    visit::{GraphIterator, IterationStrategy},
};

/// Returns `true` if `to` is reachable from `from`.
///
/// The graph is traversed by an iterator created from `strategy`, starting at
/// `from`, until `to` is produced or the traversal is exhausted. A vertex is
/// always reachable from itself.
///
/// Both endpoints are validated before the traversal is created. A missing
/// endpoint fails with [`GraphError::InvalidArgument`], `from` being checked
/// first.
#[tracing::instrument(
    skip_all,
    fields(kind = graph.kind().name(), vertex_count = graph.vertex_count())
)]
pub fn has_path<V, W, S>(
    graph: &Graph<V, W>,
    from: &V,
    to: &V,
    strategy: &S,
) -> Result<bool, GraphError<V>>
where
    V: Eq + Hash + Clone,
    W: Weight,
    S: IterationStrategy<V, W>,
{
    for endpoint in [from, to] {
        if !graph.has_vertex(endpoint) {
            return Err(GraphError::InvalidArgument(endpoint.clone()));
        }
    }

    let mut iter = strategy.create_iterator(graph, from)?;
    let mut produced = 0usize;

    while iter.has_next() {
        let vertex = iter.next_vertex()?;
        produced += 1;

        if vertex == to {
            debug!(found = true, produced, "path query finished");
            return Ok(true);
        }
    }

    debug!(found = false, produced, "path query finished");
    Ok(false)
}
