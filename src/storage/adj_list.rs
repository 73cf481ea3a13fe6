use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A registered vertex together with its outgoing adjacency entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V, W> {
    pub(crate) id: V,
    pub(crate) neighbors: Vec<(V, W)>,
}

impl<V, W> Vertex<V, W> {
    fn new(id: V) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> &V {
        &self.id
    }

    pub fn neighbors(&self) -> &[(V, W)] {
        &self.neighbors
    }
}

/// Insertion-ordered vertex registry with per-vertex adjacency entries.
///
/// Vertices are addressed by their position in the registry. Positions are
/// dense and shift down by one for every vertex that follows a removed one.
/// The storage itself knows only directed entries; mirroring for undirected
/// graphs is done by the graph on top of it.
#[derive(Debug, Clone)]
pub struct AdjList<V, W> {
    vertices: Vec<Vertex<V, W>>,
    positions: FxHashMap<V, usize>,
}

impl<V, W> AdjList<V, W>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(vertex_capacity);

        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            positions,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn position(&self, id: &V) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.positions.contains_key(id)
    }

    pub fn vertex(&self, position: usize) -> &Vertex<V, W> {
        &self.vertices[position]
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex<V, W>> + '_ {
        self.vertices.iter()
    }

    /// Returns positions of the neighbors of the vertex at `position` in the
    /// order in which the edges were added.
    pub fn neighbor_positions(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[position]
            .neighbors
            .iter()
            .filter_map(|(neighbor, _)| self.position(neighbor))
    }

    /// Registers the vertex at the end of the registry.
    ///
    /// Returns `false` and leaves the storage unchanged if an equal vertex is
    /// already present.
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }

        self.positions.insert(id.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(id));
        true
    }

    /// Removes the vertex at `position` and every entry referencing it.
    pub fn remove_vertex(&mut self, position: usize) -> V {
        let removed = self.vertices.remove(position);
        self.positions.remove(&removed.id);

        // Keep the registry order, so all following vertices move one slot
        // down.
        for vertex in &self.vertices[position..] {
            if let Some(slot) = self.positions.get_mut(&vertex.id) {
                *slot -= 1;
            }
        }

        for vertex in &mut self.vertices {
            vertex.neighbors.retain(|(neighbor, _)| neighbor != &removed.id);
        }

        removed.id
    }

    /// Inserts the entry `from -> to` or overwrites the weight of the existing
    /// one, keeping its place among the neighbors.
    ///
    /// Returns the previous weight if the entry existed.
    pub fn connect(&mut self, from: usize, to: usize, weight: W) -> Option<W> {
        let to = self.vertices[to].id.clone();
        let neighbors = &mut self.vertices[from].neighbors;

        match neighbors.iter_mut().find(|(neighbor, _)| neighbor == &to) {
            Some((_, existing)) => Some(std::mem::replace(existing, weight)),
            None => {
                neighbors.push((to, weight));
                None
            }
        }
    }

    /// Removes the entry `from -> to` and returns its weight.
    pub fn disconnect(&mut self, from: usize, to: usize) -> Option<W> {
        let to = &self.vertices[to].id;
        let index = self.vertices[from]
            .neighbors
            .iter()
            .position(|(neighbor, _)| neighbor == to)?;

        // Not `swap_remove`, the neighbor order is observable.
        let (_, weight) = self.vertices[from].neighbors.remove(index);
        Some(weight)
    }

    pub fn weight(&self, from: usize, to: &V) -> Option<&W> {
        self.vertices[from]
            .neighbors
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|(_, weight)| weight)
    }

    pub fn clear_edges(&mut self) {
        for vertex in &mut self.vertices {
            vertex.neighbors.clear();
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.positions.clear();
    }
}

impl<V, W> Default for AdjList<V, W>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(n: u32) -> AdjList<u32, i32> {
        let mut storage = AdjList::new();
        for v in 0..n {
            assert!(storage.add_vertex(v));
        }
        storage
    }

    #[test]
    fn add_vertex_rejects_duplicate() {
        let mut storage = storage(2);

        assert!(!storage.add_vertex(1));
        assert_eq!(storage.vertex_count(), 2);
        assert_eq!(storage.position(&1), Some(1));
    }

    #[test]
    fn connect_overwrites_in_place() {
        let mut storage = storage(3);

        assert_eq!(storage.connect(0, 1, 5), None);
        assert_eq!(storage.connect(0, 2, 7), None);
        assert_eq!(storage.connect(0, 1, 9), Some(5));

        assert_eq!(storage.vertex(0).neighbors(), &[(1, 9), (2, 7)]);
    }

    #[test]
    fn disconnect_keeps_order() {
        let mut storage = storage(4);

        storage.connect(0, 1, 1);
        storage.connect(0, 2, 2);
        storage.connect(0, 3, 3);

        assert_eq!(storage.disconnect(0, 1), Some(1));
        assert_eq!(storage.disconnect(0, 1), None);
        assert_eq!(storage.vertex(0).neighbors(), &[(2, 2), (3, 3)]);
    }

    #[test]
    fn remove_vertex_shifts_positions_and_purges() {
        let mut storage = storage(4);

        storage.connect(0, 1, 1);
        storage.connect(2, 1, 1);
        storage.connect(1, 3, 1);
        storage.connect(3, 2, 1);

        assert_eq!(storage.remove_vertex(1), 1);

        assert_eq!(storage.vertex_count(), 3);
        assert_eq!(storage.position(&1), None);
        assert_eq!(storage.position(&2), Some(1));
        assert_eq!(storage.position(&3), Some(2));

        assert!(storage.vertex(0).neighbors().is_empty());
        assert!(storage.vertex(1).neighbors().is_empty());
        assert_eq!(storage.vertex(2).neighbors(), &[(2, 1)]);
        assert_eq!(storage.neighbor_positions(2).collect::<Vec<_>>(), vec![1]);
    }
}
