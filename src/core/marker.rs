/// Direction semantics of the edges in a graph.
///
/// The kind is chosen when the graph is created and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Edge `(a, b)` connects `a` to `b` only.
    Directed,
    /// Edge `(a, b)` connects `a` and `b` both ways.
    Undirected,
}

pub use EdgeKind::*;

impl EdgeKind {
    #[inline]
    pub fn is_directed(&self) -> bool {
        matches!(self, Directed)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Directed => "directed",
            Undirected => "undirected",
        }
    }
}
