//! All-pairs shortest paths over an unweighted graph.
//!
//! One BFS per source vertex. Each row of the table stores parent pointers
//! instead of full paths; a path is rebuilt on lookup by walking parents
//! from the destination back to the source.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Dense vertex position, `0..N`, fixed for one table.
pub type VertexIdx = u32;

/// Bijection between vertices and dense indices, in graph insertion order.
#[derive(Debug, Clone)]
pub struct VertexIndex<E> {
    vertices: Vec<E>,
    positions: HashMap<E, VertexIdx>,
}

impl<E> VertexIndex<E>
where
    E: Eq + Hash + Clone,
{
    /// Index the live vertices of `graph` in the order they were added.
    pub fn from_graph(graph: &Graph<E>) -> Self {
        let vertices: Vec<E> = graph.all_vertices().cloned().collect();
        let positions = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i as VertexIdx))
            .collect();
        Self {
            vertices,
            positions,
        }
    }

    pub fn position<Q>(&self, vertex: &Q) -> Option<VertexIdx>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(vertex).copied()
    }

    pub fn vertex(&self, idx: VertexIdx) -> Option<&E> {
        self.vertices.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[E] {
        &self.vertices
    }
}

/// One cell of the table, for a (source, destination) pair.
///
/// Packed into a single `u32`: the parent's dense index when the
/// destination was reached, or one of two sentinels at the top of the range.
/// Distances are not stored; they fall out of the parent walk.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PathCell(u32);

impl PathCell {
    /// Source and destination are the same vertex.
    pub const ORIGIN: PathCell = PathCell(u32::MAX);
    /// No path from the source.
    pub const UNREACHABLE: PathCell = PathCell(u32::MAX - 1);
    /// Indices at or above this collide with the sentinels.
    pub const MAX_VERTICES: usize = (u32::MAX - 1) as usize;

    /// Destination reached; `parent` is the previous hop.
    pub fn reached(parent: VertexIdx) -> Self {
        debug_assert!((parent as usize) < Self::MAX_VERTICES);
        PathCell(parent)
    }

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    pub fn is_unreachable(self) -> bool {
        self == Self::UNREACHABLE
    }

    /// Previous hop, if the destination was reached from another vertex.
    pub fn parent(self) -> Option<VertexIdx> {
        if self.is_origin() || self.is_unreachable() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl std::fmt::Debug for PathCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.parent() {
            Some(parent) => f.debug_struct("Reached").field("parent", &parent).finish(),
            None if self.is_origin() => f.write_str("Origin"),
            None => f.write_str("Unreachable"),
        }
    }
}

/// Outcome of a table lookup with the path materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<E> {
    Origin,
    /// Both endpoints included, so at least two vertices.
    Path(Vec<E>),
    Unreachable,
}

/// Precomputed shortest paths between every ordered pair of vertices.
///
/// Rows are keyed by source index, columns by destination index. Built once
/// from a finished graph and never patched; a graph change means building a
/// new table.
#[derive(Debug, Clone)]
pub struct PathTable<E> {
    index: VertexIndex<E>,
    cells: Vec<PathCell>,
}

impl<E> PathTable<E>
where
    E: Eq + Hash + Clone,
{
    /// Bytes the cell matrix needs for `vertex_count` vertices.
    pub fn estimated_bytes(vertex_count: usize) -> usize {
        vertex_count
            .saturating_mul(vertex_count)
            .saturating_mul(std::mem::size_of::<PathCell>())
    }

    /// Run a BFS from every vertex of `graph` and record the results.
    pub fn build(graph: &Graph<E>) -> Self {
        let index = VertexIndex::from_graph(graph);
        let n = index.len();
        debug_assert!(n < PathCell::MAX_VERTICES);

        // Translate arena slots to dense indices once, so the per-source
        // loops never touch the hash map.
        let mut dense_of_slot = vec![VertexIdx::MAX; graph.slot_bound()];
        for (i, (slot, _)) in graph.slots().enumerate() {
            dense_of_slot[slot] = i as VertexIdx;
        }
        let adjacency: Vec<Vec<VertexIdx>> = graph
            .slots()
            .map(|(slot, _)| {
                graph
                    .neighbor_slots(slot)
                    .iter()
                    .map(|&s| dense_of_slot[s])
                    .collect()
            })
            .collect();

        let mut cells = vec![PathCell::UNREACHABLE; n * n];
        let mut queue: VecDeque<VertexIdx> = VecDeque::with_capacity(n);
        for (source, row) in cells.chunks_mut(n.max(1)).enumerate().take(n) {
            bfs_row(&adjacency, source as VertexIdx, row, &mut queue);
        }

        Self { index, cells }
    }

    pub fn index(&self) -> &VertexIndex<E> {
        &self.index
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.position(vertex).is_some()
    }

    /// Raw cell for a pair. None if either vertex is not indexed.
    pub fn cell<Q>(&self, from: &Q, to: &Q) -> Option<PathCell>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.index.position(from)?;
        let d = self.index.position(to)?;
        Some(self.cells[self.offset(s, d)])
    }

    /// Hop count for a pair: Some(None) when unreachable, Some(Some(0)) for
    /// the origin cell, None if either vertex is not indexed.
    ///
    /// Counts parent hops without materializing the path.
    pub fn distance<Q>(&self, from: &Q, to: &Q) -> Option<Option<u32>>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.index.position(from)?;
        let d = self.index.position(to)?;
        if self.cells[self.offset(s, d)].is_unreachable() {
            return Some(None);
        }

        let mut hops = 0;
        let mut current = d;
        while let Some(parent) = self.cells[self.offset(s, current)].parent() {
            current = parent;
            hops += 1;
        }
        Some(Some(hops))
    }

    /// Look up a pair and rebuild its path. None if either vertex is not
    /// indexed.
    pub fn route<Q>(&self, from: &Q, to: &Q) -> Option<Route<E>>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.index.position(from)?;
        let d = self.index.position(to)?;
        let cell = self.cells[self.offset(s, d)];
        Some(if cell.is_origin() {
            Route::Origin
        } else if cell.is_unreachable() {
            Route::Unreachable
        } else {
            Route::Path(self.reconstruct(s, d))
        })
    }

    /// Approximate memory usage in bytes, excluding heap data owned by `E`.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let cells_mem = self.cells.len() * size_of::<PathCell>();
        let index_mem = self.index.len() * (2 * size_of::<E>() + size_of::<VertexIdx>() + 16);
        cells_mem + index_mem
    }

    fn offset(&self, source: VertexIdx, dest: VertexIdx) -> usize {
        source as usize * self.index.len() + dest as usize
    }

    /// Walk parent pointers in `source`'s row from `dest` back to `source`.
    fn reconstruct(&self, source: VertexIdx, dest: VertexIdx) -> Vec<E> {
        let mut path = Vec::new();
        let mut current = dest;

        loop {
            if let Some(v) = self.index.vertex(current) {
                path.push(v.clone());
            }
            match self.cells[self.offset(source, current)].parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl<E> PartialEq for PathTable<E>
where
    E: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.index.vertices == other.index.vertices && self.cells == other.cells
    }
}

/// Fill one row with BFS from `source`.
///
/// A vertex is settled the first time it is discovered. Neighbors are
/// scanned in adjacency order, so among equal-length paths the one through
/// the earliest-discovered predecessor wins.
fn bfs_row(
    adjacency: &[Vec<VertexIdx>],
    source: VertexIdx,
    row: &mut [PathCell],
    queue: &mut VecDeque<VertexIdx>,
) {
    queue.clear();
    row[source as usize] = PathCell::ORIGIN;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in &adjacency[current as usize] {
            if row[next as usize].is_unreachable() {
                row[next as usize] = PathCell::reached(current);
                queue.push_back(next);
            }
        }
    }
}
