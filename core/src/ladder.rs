use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adjacency::{canonicalize, chars_adjacent};
use crate::config::LadderConfig;
use crate::dictionary::WordSource;
use crate::error::{LadderError, Result};
use crate::graph::Graph;
use crate::paths::{PathTable, Route};
use crate::traversal::{self, DegreeResult, NeighborResult};

/// Lifecycle of a `WordLadder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderState {
    /// No words loaded.
    Empty,
    /// Graph built, no path table (or the table is stale).
    Populated,
    /// Path table matches the current graph; queries are available.
    Precomputed,
}

/// Snapshot of a ladder's size and timings.
#[derive(Debug, Clone, Serialize)]
pub struct LadderStats {
    pub state: LadderState,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub graph_memory_bytes: usize,
    pub table_memory_bytes: usize,
    pub populate_ms: f64,
    pub precompute_ms: f64,
    pub max_memory_mb: usize,
}

/// Word graph plus its precomputed shortest paths.
///
/// `populate` adds words and edges, `precompute` builds the path table, and
/// the query methods read from it. Mutation takes `&mut self`, so a reader
/// can never see a table that is half built.
pub struct WordLadder {
    config: LadderConfig,
    graph: Graph<String>,
    table: Option<PathTable<String>>,
    populate_ms: f64,
    precompute_ms: f64,
}

impl WordLadder {
    pub fn new() -> Self {
        Self::with_config(LadderConfig::default())
    }

    pub fn with_config(config: LadderConfig) -> Self {
        Self {
            config,
            graph: Graph::new(),
            table: None,
            populate_ms: 0.0,
            precompute_ms: 0.0,
        }
    }

    pub fn state(&self) -> LadderState {
        if self.table.is_some() {
            LadderState::Precomputed
        } else if self.graph.vertex_count() > 0 {
            LadderState::Populated
        } else {
            LadderState::Empty
        }
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Read every word from `source` and add it to the graph.
    ///
    /// The source is read in full before the graph is touched: on
    /// `SourceUnavailable` nothing changes. Returns the number of new
    /// vertices.
    pub fn populate<S: WordSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        let words = source.words().inspect_err(|e| {
            warn!(source = %source.name(), error = %e, "word source failed, graph unchanged");
        })?;
        Ok(self.populate_words(words))
    }

    /// Add raw words to the graph and connect every pair one edit apart.
    ///
    /// Words are canonicalized; blanks and words already present are
    /// skipped. Pairs of words that were both present before this call are
    /// not re-tested. Returns the number of new vertices.
    pub fn populate_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let first_new = self.graph.slot_bound();

        let mut added = 0;
        for raw in words {
            if let Some(word) = canonicalize(raw.as_ref()) {
                if self.graph.add_vertex(word) {
                    added += 1;
                }
            }
        }

        if added == 0 {
            debug!("populate added no new words");
            return 0;
        }

        let edges_before = self.graph.edge_count();
        self.connect_new_words(first_new);
        self.table = None;
        self.populate_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            added,
            vertices = self.graph.vertex_count(),
            new_edges = self.graph.edge_count() - edges_before,
            elapsed_ms = self.populate_ms,
            "populated word graph"
        );
        added
    }

    /// Pairwise scan over vertices in insertion order. For i < j, edge
    /// (w_i, w_j) is added when they are adjacent and at least one of them
    /// sits at or past `first_new`.
    fn connect_new_words(&mut self, first_new: usize) {
        let live: Vec<(usize, String)> = self
            .graph
            .slots()
            .map(|(slot, w)| (slot, w.clone()))
            .collect();
        let chars: Vec<Vec<char>> = live.iter().map(|(_, w)| w.chars().collect()).collect();

        for i in 0..live.len() {
            for j in (i + 1)..live.len() {
                // Slots ascend, so j old implies i old.
                if live[j].0 < first_new {
                    continue;
                }
                if chars_adjacent(&chars[i], &chars[j]) {
                    self.graph.add_edge(live[i].1.as_str(), live[j].1.as_str());
                }
            }
        }
    }

    /// Build the all-pairs path table from the current graph.
    ///
    /// Fails with `InvalidArgument` when no words are loaded and with
    /// `MemoryLimit` when the table would exceed `max_memory_mb`; in both
    /// cases the previous table, if any, is kept.
    pub fn precompute(&mut self) -> Result<()> {
        let n = self.graph.vertex_count();
        if n == 0 {
            return Err(LadderError::InvalidArgument(
                "no words loaded; populate before precompute".to_string(),
            ));
        }

        let required = PathTable::<String>::estimated_bytes(n);
        if required > self.config.max_memory_bytes() {
            let required_mb = required.div_ceil(1024 * 1024);
            warn!(
                vertices = n,
                required_mb,
                max_mb = self.config.max_memory_mb,
                "path table exceeds memory ceiling"
            );
            return Err(LadderError::MemoryLimit {
                required_mb,
                max_mb: self.config.max_memory_mb,
            });
        }

        let start = Instant::now();
        let table = PathTable::build(&self.graph);
        self.table = Some(table);
        self.precompute_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            vertices = n,
            elapsed_ms = self.precompute_ms,
            "precomputed shortest paths"
        );
        Ok(())
    }

    /// The word ladder from `word1` to `word2`, both ends included.
    ///
    /// - Equal words (after canonicalization): `Ok(Some(vec![]))`.
    /// - No ladder exists: `Ok(None)`.
    /// - Not precomputed, blank word, or unknown word: `InvalidArgument`.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<Option<Vec<String>>> {
        let table = self.table()?;
        let Some((from, to)) = query_pair(table, word1, word2)? else {
            return Ok(Some(Vec::new()));
        };

        match table.route(from.as_str(), to.as_str()) {
            Some(Route::Path(path)) => Ok(Some(path)),
            Some(Route::Origin) => Ok(Some(Vec::new())),
            Some(Route::Unreachable) | None => Ok(None),
        }
    }

    /// Number of edits on the ladder from `word1` to `word2`.
    ///
    /// -1 when the words are equal or no ladder exists. Errors exactly as
    /// `shortest_path`.
    pub fn shortest_distance(&self, word1: &str, word2: &str) -> Result<i32> {
        let table = self.table()?;
        let Some((from, to)) = query_pair(table, word1, word2)? else {
            return Ok(-1);
        };

        match table.distance(from.as_str(), to.as_str()) {
            Some(Some(hops)) if hops > 0 => Ok(hops as i32),
            _ => Ok(-1),
        }
    }

    /// Words within `max_depth` edits of `word`, nearest first.
    ///
    /// Runs directly on the graph; no precompute needed.
    pub fn neighborhood(&self, word: &str, max_depth: u32) -> Result<Vec<NeighborResult<String>>> {
        let start = canonical_query(word)?;
        if !self.graph.contains(start.as_str()) {
            return Err(LadderError::InvalidArgument(format!(
                "'{}' is not in the vocabulary",
                start
            )));
        }
        Ok(traversal::bfs_neighborhood(&self.graph, start.as_str(), max_depth).neighbors)
    }

    /// Most-connected words. `top_n == 0` returns all of them.
    pub fn degree_centrality(&self, top_n: usize) -> Vec<DegreeResult<String>> {
        traversal::degree_centrality(&self.graph, top_n)
    }

    pub fn stats(&self) -> LadderStats {
        LadderStats {
            state: self.state(),
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            graph_memory_bytes: self.graph.memory_usage(),
            table_memory_bytes: self.table.as_ref().map_or(0, |t| t.memory_usage()),
            populate_ms: self.populate_ms,
            precompute_ms: self.precompute_ms,
            max_memory_mb: self.config.max_memory_mb,
        }
    }

    fn table(&self) -> Result<&PathTable<String>> {
        self.table.as_ref().ok_or_else(|| {
            LadderError::InvalidArgument(
                "shortest paths not precomputed; call precompute() first".to_string(),
            )
        })
    }
}

impl Default for WordLadder {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical_query(word: &str) -> Result<String> {
    canonicalize(word)
        .ok_or_else(|| LadderError::InvalidArgument("query word is blank".to_string()))
}

/// Canonical endpoints of a ladder query, or None when they are the same
/// word. Blank words are rejected before the equality check, unknown words
/// after it.
fn query_pair(
    table: &PathTable<String>,
    word1: &str,
    word2: &str,
) -> Result<Option<(String, String)>> {
    let from = canonical_query(word1)?;
    let to = canonical_query(word2)?;
    if from == to {
        return Ok(None);
    }

    for word in [&from, &to] {
        if !table.contains(word.as_str()) {
            return Err(LadderError::InvalidArgument(format!(
                "'{}' is not in the vocabulary",
                word
            )));
        }
    }
    Ok(Some((from, to)))
}
