//! word-ladder-core: edit-distance word graph with precomputed ladders.
//!
//! Words become vertices of an undirected, unweighted graph; two words
//! share an edge when one substitution, insertion, or deletion turns one
//! into the other. A BFS from every vertex fills an all-pairs table, so
//! ladder and distance queries are lookups.
//!
//! No I/O beyond reading a dictionary file; the CLI and bench crates wrap
//! this library.

mod adjacency;
mod config;
mod dictionary;
mod error;
mod graph;
mod ladder;
mod paths;
mod traversal;

pub use adjacency::{canonicalize, is_adjacent};
pub use config::{LadderConfig, DEFAULT_MAX_MEMORY_MB, MAX_MAX_MEMORY_MB, MIN_MAX_MEMORY_MB};
pub use dictionary::{normalize_lines, DictionaryFile, WordList, WordSource};
pub use error::{LadderError, Result};
pub use graph::{Graph, Neighbors, SlotId};
pub use ladder::{LadderState, LadderStats, WordLadder};
pub use paths::{PathCell, PathTable, Route, VertexIdx, VertexIndex};
pub use traversal::{
    bfs_neighborhood, degree_centrality, DegreeResult, NeighborResult, TraversalResult,
};
