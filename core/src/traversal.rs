use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::{Graph, SlotId};

/// A vertex found during BFS neighborhood traversal.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborResult<E> {
    pub vertex: E,
    pub distance: u32,
    /// One shortest path from the start to this vertex, both ends included.
    pub path: Vec<E>,
}

/// Result of a traversal operation.
#[derive(Debug)]
pub struct TraversalResult<E> {
    pub neighbors: Vec<NeighborResult<E>>,
    pub vertices_visited: usize,
}

/// Degree information for a single vertex.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeResult<E> {
    pub vertex: E,
    pub degree: u32,
}

/// BFS neighborhood: every vertex reachable from `start` within
/// `max_depth` hops, in discovery order (non-decreasing distance).
///
/// Each vertex is visited at most once, at its minimum distance. Parent
/// slots are stored instead of cloning path Vecs at each step; paths are
/// rebuilt during result collection.
pub fn bfs_neighborhood<E, Q>(graph: &Graph<E>, start: &Q, max_depth: u32) -> TraversalResult<E>
where
    E: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let Some(start) = graph.slot_of(start) else {
        return TraversalResult {
            neighbors: Vec::new(),
            vertices_visited: 0,
        };
    };

    // parent[slot] = (parent_slot, distance); the start is its own parent
    let mut parent: Vec<Option<(SlotId, u32)>> = vec![None; graph.slot_bound()];
    let mut order: Vec<SlotId> = Vec::new();
    let mut queue: VecDeque<(SlotId, u32)> = VecDeque::new();

    parent[start] = Some((start, 0));
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbor_slots(current) {
            if parent[next].is_none() {
                parent[next] = Some((current, depth + 1));
                order.push(next);
                queue.push_back((next, depth + 1));
            }
        }
    }

    let vertices_visited = order.len() + 1;

    let neighbors = order
        .into_iter()
        .filter_map(|slot| {
            let vertex = graph.vertex_at(slot)?.clone();
            let (_, distance) = parent[slot]?;
            Some(NeighborResult {
                vertex,
                distance,
                path: reconstruct_path(graph, &parent, start, slot),
            })
        })
        .collect();

    TraversalResult {
        neighbors,
        vertices_visited,
    }
}

/// Walk parent slots from `slot` back to `start`.
fn reconstruct_path<E>(
    graph: &Graph<E>,
    parent: &[Option<(SlotId, u32)>],
    start: SlotId,
    slot: SlotId,
) -> Vec<E>
where
    E: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut current = slot;

    loop {
        if let Some(v) = graph.vertex_at(current) {
            path.push(v.clone());
        }
        if current == start {
            break;
        }
        match parent[current] {
            Some((p, _)) => current = p,
            None => break,
        }
    }

    path.reverse();
    path
}

/// Return vertices ranked by degree.
///
/// If `top_n` is 0, returns all vertices. Otherwise returns the top N by
/// degree (descending). Ties are broken by insertion order.
pub fn degree_centrality<E>(graph: &Graph<E>, top_n: usize) -> Vec<DegreeResult<E>>
where
    E: Eq + Hash + Clone,
{
    let mut ranked: Vec<(SlotId, u32)> = graph
        .slots()
        .map(|(slot, _)| (slot, graph.neighbor_slots(slot).len() as u32))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    if top_n > 0 && top_n < ranked.len() {
        ranked.truncate(top_n);
    }

    ranked
        .into_iter()
        .filter_map(|(slot, degree)| {
            graph.vertex_at(slot).map(|v| DegreeResult {
                vertex: v.clone(),
                degree,
            })
        })
        .collect()
}
