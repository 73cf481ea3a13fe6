use fixedbitset::FixedBitSet;

/// Vertices of a graph mapped to their neighbors.
///
/// Entries keep the vertex insertion order of the graph and each neighbor
/// sequence keeps the order in which the edges were added. Lookup by vertex
/// is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList<V> {
    entries: Vec<(V, Vec<V>)>,
}

impl<V> AdjacencyList<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, vertex: &V) -> Option<&[V]>
    where
        V: PartialEq,
    {
        self.entries
            .iter()
            .find(|(key, _)| key == vertex)
            .map(|(_, neighbors)| neighbors.as_slice())
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&V, &[V])> + '_ {
        self.entries
            .iter()
            .map(|(key, neighbors)| (key, neighbors.as_slice()))
    }
}

impl<V> FromIterator<(V, Vec<V>)> for AdjacencyList<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for AdjacencyList<V> {
    type Item = (V, Vec<V>);
    type IntoIter = std::vec::IntoIter<(V, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: PartialEq> PartialEq<Vec<(V, Vec<V>)>> for AdjacencyList<V> {
    fn eq(&self, other: &Vec<(V, Vec<V>)>) -> bool {
        &self.entries == other
    }
}

/// Square presence matrix of the edges in a graph.
///
/// Rows and columns follow the vertex insertion order; the cell `(i, j)` is
/// set iff there is an edge from the `i`-th to the `j`-th vertex. For
/// undirected graphs the matrix is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: FixedBitSet,
}

impl AdjacencyMatrix {
    pub(crate) fn new(order: usize) -> Self {
        Self {
            order,
            cells: FixedBitSet::with_capacity(order * order),
        }
    }

    pub(crate) fn insert(&mut self, row: usize, col: usize) {
        self.cells.insert(self.index(row, col));
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns `true` if the cell is set. Out-of-range cells are never set.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.order && col < self.order && self.cells.contains(self.index(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        u8::from(self.contains(row, col))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = Vec<u8>> + '_ {
        (0..self.order).map(move |row| (0..self.order).map(|col| self.get(row, col)).collect())
    }

    pub fn to_vec(&self) -> Vec<Vec<u8>> {
        self.rows().collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.order + col
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_vec()
    }
}

impl PartialEq<Vec<Vec<u8>>> for AdjacencyMatrix {
    fn eq(&self, other: &Vec<Vec<u8>>) -> bool {
        other.len() == self.order && self.rows().zip(other).all(|(row, other)| &row == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_cells() {
        let mut matrix = AdjacencyMatrix::new(3);
        matrix.insert(0, 2);
        matrix.insert(2, 1);

        assert!(matrix.contains(0, 2));
        assert!(!matrix.contains(2, 0));
        assert!(!matrix.contains(3, 0));
        assert_eq!(matrix.get(2, 1), 1);
        assert_eq!(
            matrix.to_vec(),
            vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 1, 0]]
        );
        assert_ne!(matrix, vec![vec![0, 0, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn list_lookup() {
        let list: AdjacencyList<char> = vec![('a', vec!['b']), ('b', vec![])]
            .into_iter()
            .collect();

        assert_eq!(list.get(&'a'), Some(&['b'][..]));
        assert_eq!(list.get(&'b'), Some(&[][..]));
        assert_eq!(list.get(&'c'), None);
        assert_eq!(list.keys().copied().collect::<Vec<_>>(), vec!['a', 'b']);
    }
}
