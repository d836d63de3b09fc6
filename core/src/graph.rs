use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Position of a vertex in the graph's arena. Stable for the vertex's
/// lifetime; a removed vertex leaves its slot vacant and it is never reused.
pub type SlotId = usize;

/// In-memory undirected, unweighted graph.
///
/// Vertices live in an arena in insertion order. Adjacency is stored per
/// slot as a list of neighbor slots in edge-add order. Every edge is written
/// to both endpoints' lists by a single helper, so `a` appears in `b`'s list
/// exactly when `b` appears in `a`'s.
pub struct Graph<E> {
    slots: Vec<Option<E>>,
    index: HashMap<E, SlotId>,
    adjacency: Vec<Vec<SlotId>>,
    edge_count: usize,
}

impl<E> Graph<E>
where
    E: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known vocabulary size.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Insert a vertex. Returns false if it is already present.
    pub fn add_vertex(&mut self, vertex: E) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        let slot = self.slots.len();
        self.index.insert(vertex.clone(), slot);
        self.slots.push(Some(vertex));
        self.adjacency.push(Vec::new());
        true
    }

    /// Remove a vertex and every edge touching it. Returns false if absent.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(slot) = self.index.remove(vertex) else {
            return false;
        };
        self.slots[slot] = None;

        let neighbors = std::mem::take(&mut self.adjacency[slot]);
        for &n in &neighbors {
            self.adjacency[n].retain(|&s| s != slot);
        }
        self.edge_count -= neighbors.len();
        true
    }

    /// Add an undirected edge.
    ///
    /// Returns false if either vertex is missing, if both are the same
    /// vertex, or if the edge already exists.
    pub fn add_edge<Q>(&mut self, v1: &Q, v2: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((s1, s2)) = self.edge_slots(v1, v2) else {
            return false;
        };
        if self.adjacency[s1].contains(&s2) {
            return false;
        }
        self.link(s1, s2);
        true
    }

    /// Remove one occurrence of the edge between `v1` and `v2`.
    ///
    /// Returns false under the same preconditions as `add_edge`; removing an
    /// edge that does not exist between two valid vertices is a no-op that
    /// still reports success.
    pub fn remove_edge<Q>(&mut self, v1: &Q, v2: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((s1, s2)) = self.edge_slots(v1, v2) else {
            return false;
        };
        if let Some(pos) = self.adjacency[s1].iter().position(|&s| s == s2) {
            self.adjacency[s1].remove(pos);
            if let Some(back) = self.adjacency[s2].iter().position(|&s| s == s1) {
                self.adjacency[s2].remove(back);
            }
            self.edge_count -= 1;
        }
        true
    }

    /// True iff both vertices exist, differ, and share an edge.
    pub fn is_adjacent<Q>(&self, v1: &Q, v2: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.edge_slots(v1, v2) {
            Some((s1, s2)) => self.adjacency[s1].contains(&s2),
            None => false,
        }
    }

    /// Neighbors of `vertex` in edge-add order. Empty if the vertex is absent.
    pub fn neighbors<Q>(&self, vertex: &Q) -> Neighbors<'_, E>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slots = self
            .index
            .get(vertex)
            .map(|&s| self.adjacency[s].as_slice())
            .unwrap_or(&[]);
        Neighbors {
            graph: self,
            inner: slots.iter(),
        }
    }

    /// All live vertices in insertion order.
    pub fn all_vertices(&self) -> impl Iterator<Item = &E> + '_ {
        self.slots.iter().flatten()
    }

    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(vertex)
    }

    /// Arena slot of a vertex.
    pub fn slot_of<Q>(&self, vertex: &Q) -> Option<SlotId>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(vertex).copied()
    }

    /// Vertex stored at `slot`, None if the slot is vacant or out of range.
    pub fn vertex_at(&self, slot: SlotId) -> Option<&E> {
        self.slots.get(slot).and_then(|v| v.as_ref())
    }

    /// Neighbor slots of `slot` in edge-add order.
    pub fn neighbor_slots(&self, slot: SlotId) -> &[SlotId] {
        self.adjacency.get(slot).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Live (slot, vertex) pairs in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &E)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, v)| v.as_ref().map(|v| (slot, v)))
    }

    /// One past the highest slot ever assigned, vacant slots included.
    pub fn slot_bound(&self) -> usize {
        self.slots.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes, excluding heap data owned by `E`.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let slots_mem = self.slots.len() * size_of::<Option<E>>();
        let index_mem = self.index.len() * (size_of::<E>() + size_of::<SlotId>() + 16);
        let adj_mem: usize = self
            .adjacency
            .iter()
            .map(|v| size_of::<Vec<SlotId>>() + v.len() * size_of::<SlotId>())
            .sum();

        slots_mem + index_mem + adj_mem
    }

    fn edge_slots<Q>(&self, v1: &Q, v2: &Q) -> Option<(SlotId, SlotId)>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s1 = *self.index.get(v1)?;
        let s2 = *self.index.get(v2)?;
        if s1 == s2 {
            return None;
        }
        Some((s1, s2))
    }

    fn link(&mut self, s1: SlotId, s2: SlotId) {
        self.adjacency[s1].push(s2);
        self.adjacency[s2].push(s1);
        self.edge_count += 1;
    }
}

impl<E> Default for Graph<E>
where
    E: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a vertex's neighbors. Cloning restarts from the same point.
pub struct Neighbors<'a, E> {
    graph: &'a Graph<E>,
    inner: std::slice::Iter<'a, SlotId>,
}

impl<'a, E> Iterator for Neighbors<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner
            .by_ref()
            .find_map(|&s| graph.slots.get(s).and_then(|v| v.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<E> Clone for Neighbors<'_, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: u64) -> Graph<u64> {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_vertex(i);
        }
        for i in 0..n - 1 {
            g.add_edge(&i, &(i + 1));
        }
        g
    }

    fn words(list: &[&str]) -> Graph<String> {
        let mut g = Graph::new();
        for w in list {
            g.add_vertex(w.to_string());
        }
        g
    }

    #[test]
    fn test_add_vertex_rejects_duplicates() {
        let mut g = Graph::new();
        assert!(g.add_vertex("CAT".to_string()));
        assert!(!g.add_vertex("CAT".to_string()));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut g = words(&["CAT", "HAT"]);
        assert!(g.add_edge("CAT", "HAT"));
        assert!(g.is_adjacent("CAT", "HAT"));
        assert!(g.is_adjacent("HAT", "CAT"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_preconditions() {
        let mut g = words(&["CAT", "HAT"]);
        assert!(!g.add_edge("CAT", "CAT"));
        assert!(!g.add_edge("CAT", "DOG"));
        assert!(!g.add_edge("DOG", "CAT"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_duplicate_rejected() {
        let mut g = words(&["CAT", "HAT"]);
        assert!(g.add_edge("CAT", "HAT"));
        assert!(!g.add_edge("HAT", "CAT"));
        assert_eq!(g.neighbors("CAT").count(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_no_self_adjacency() {
        let g = make_chain(3);
        for v in 0..3u64 {
            assert!(!g.is_adjacent(&v, &v));
        }
    }

    #[test]
    fn test_is_adjacent_missing_vertex() {
        let g = make_chain(3);
        assert!(!g.is_adjacent(&0, &99));
        assert!(!g.is_adjacent(&99, &0));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = make_chain(3);
        assert!(g.remove_edge(&0, &1));
        assert!(!g.is_adjacent(&0, &1));
        assert!(!g.is_adjacent(&1, &0));
        assert!(g.is_adjacent(&1, &2));
        assert_eq!(g.edge_count(), 1);

        // Valid pair without an edge: succeeds, changes nothing
        assert!(g.remove_edge(&0, &2));
        assert_eq!(g.edge_count(), 1);

        assert!(!g.remove_edge(&0, &0));
        assert!(!g.remove_edge(&0, &99));
    }

    #[test]
    fn test_remove_vertex_strips_adjacency() {
        let mut g = make_chain(3);
        assert!(g.remove_vertex(&1));
        assert!(!g.contains(&1));
        assert_eq!(g.neighbors(&0).count(), 0);
        assert_eq!(g.neighbors(&2).count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertex_count(), 2);
        assert!(!g.remove_vertex(&1));
    }

    #[test]
    fn test_remove_then_readd_vertex() {
        let mut g = make_chain(3);
        g.remove_vertex(&0);
        assert!(g.add_vertex(0));
        assert_eq!(g.neighbors(&0).count(), 0);
        // Re-added vertex goes to the end of insertion order
        let order: Vec<u64> = g.all_vertices().copied().collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_neighbors_insertion_order() {
        let mut g = words(&["CAT", "HAT", "CAR", "BAT"]);
        g.add_edge("CAT", "HAT");
        g.add_edge("BAT", "CAT");
        g.add_edge("CAT", "CAR");
        let n: Vec<&String> = g.neighbors("CAT").collect();
        assert_eq!(n, vec!["HAT", "BAT", "CAR"]);
    }

    #[test]
    fn test_neighbors_restartable() {
        let g = make_chain(3);
        let it = g.neighbors(&1);
        let first: Vec<u64> = it.clone().copied().collect();
        let second: Vec<u64> = it.copied().collect();
        assert_eq!(first, vec![0, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_neighbors_missing_vertex_empty() {
        let g = make_chain(3);
        assert_eq!(g.neighbors(&42).count(), 0);
    }

    #[test]
    fn test_all_vertices() {
        let g = make_chain(5);
        let all: Vec<u64> = g.all_vertices().copied().collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_symmetry_after_mixed_mutations() {
        let mut g = make_chain(6);
        g.add_edge(&0, &5);
        g.remove_vertex(&3);
        g.remove_edge(&1, &2);
        g.add_edge(&2, &4);
        for a in 0..6u64 {
            for b in 0..6u64 {
                assert_eq!(g.is_adjacent(&a, &b), g.is_adjacent(&b, &a));
            }
        }
        // Closure: every neighbor is a live vertex
        for v in g.all_vertices() {
            assert!(g.neighbors(v).all(|n| g.contains(n)));
        }
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<String> = Graph::new();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.all_vertices().count(), 0);
    }
}
