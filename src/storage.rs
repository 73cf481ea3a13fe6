//! Graph storage.
//!
//! The [adjacency list](adj_list) keeps the vertex registry in insertion
//! order and, for every vertex, the list of its outgoing `(neighbor, weight)`
//! entries in the order the edges were added.
//!
//! |                | **[AdjList]**  |
//! |----------------|----------------|
//! | add vertex     | _O*(1)_        |
//! | add edge       | _O(d)_         |
//! | get neighbors  | _O(d)_         |
//! | lookup vertex  | _O(1)_         |
//! | lookup edge    | _O(d)_         |
//! | remove vertex  | _O(V + E)_     |
//! | remove edge    | _O(d)_         |
//! | space          | _O(V + E)_     |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity

pub mod adj_list;

#[doc(inline)]
pub use self::adj_list::AdjList;
