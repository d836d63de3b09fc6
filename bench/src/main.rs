use std::time::Instant;

use word_ladder_core::{LadderState, WordLadder};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let word_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: word-ladder-bench [mode] [word_count]");
        println!();
        println!("Modes:");
        println!("  all       Run all generators and benchmark each (default)");
        println!("  random    Short random words over a small alphabet (dense ladders)");
        println!("  chain     One long ladder, each word one substitution from the next");
        println!("  clusters  Dense word families joined by a thin bridge");
        println!();
        println!("Default word_count: 3000");
        return;
    }

    println!("word-ladder-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Vec<String>)> = match mode {
        "random" => vec![("Random short words", gen_random)],
        "chain" => vec![("Single ladder chain", gen_chain)],
        "clusters" => vec![("Clusters with bridge", gen_clusters)],
        "all" => vec![
            ("Random short words", gen_random as fn(usize) -> Vec<String>),
            ("Single ladder chain", gen_chain),
            ("Clusters with bridge", gen_clusters),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, word_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Vec<String>, word_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} words", word_count);

    let words = generator(word_count);
    let mut ladder = WordLadder::new();

    let t = Instant::now();
    let added = ladder.populate_words(&words);
    let populate_time = t.elapsed();
    println!(
        "Populated in {:.2}s: {} words, {} edges, ~{:.1}MB graph",
        populate_time.as_secs_f64(),
        added,
        ladder.graph().edge_count(),
        ladder.graph().memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    if let Err(e) = ladder.precompute() {
        println!("Precompute failed: {}", e);
        println!();
        return;
    }
    let precompute_time = t.elapsed();
    println!(
        "Precomputed in {:.2}s: ~{:.1}MB path table",
        precompute_time.as_secs_f64(),
        ladder.stats().table_memory_bytes as f64 / 1_048_576.0
    );
    debug_assert_eq!(ladder.state(), LadderState::Precomputed);

    // Queries: first word to a spread of others
    println!();
    println!("{:>10} {:>10} {:>10}", "target", "distance", "time");
    println!("{:->10} {:->10} {:->10}", "", "", "");

    let vocab: Vec<String> = ladder.graph().all_vertices().cloned().collect();
    let Some(first) = vocab.first() else {
        return;
    };
    let step = (vocab.len() / 5).max(1);
    for target in vocab.iter().step_by(step) {
        let t = Instant::now();
        let distance = ladder.shortest_distance(first, target).unwrap_or(-1);
        let elapsed = t.elapsed();
        println!(
            "{:>10} {:>10} {:>8.3}us",
            target,
            distance,
            elapsed.as_secs_f64() * 1_000_000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

const ALPHABET: &[u8] = b"ABCDEFGH";

fn random_word(rng: &mut FastRng, min_len: u64, max_len: u64) -> String {
    let len = min_len + rng.next(max_len - min_len + 1);
    (0..len)
        .map(|_| ALPHABET[rng.next(ALPHABET.len() as u64) as usize] as char)
        .collect()
}

/// Random words of length 3-5 over an 8-letter alphabet. Small alphabet
/// keeps the one-edit neighborhoods dense.
fn gen_random(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(54321);
    (0..word_count).map(|_| random_word(&mut rng, 3, 5)).collect()
}

fn spell(letters: &[u64]) -> String {
    letters.iter().map(|&i| ALPHABET[i as usize] as char).collect()
}

/// One long ladder: a random walk of single substitutions over 8-letter
/// words, so each word is one edit from the one before it.
///
/// Worst case for path length: distances grow along the walk.
fn gen_chain(word_count: usize) -> Vec<String> {
    let width = 8;
    let alphabet_len = ALPHABET.len() as u64;
    let mut letters: Vec<u64> = vec![0; width];
    let mut words = Vec::with_capacity(word_count);
    let mut rng = FastRng::new(12345);

    words.push(spell(&letters));
    while words.len() < word_count {
        // Always a different letter at the chosen position
        let pos = rng.next(width as u64) as usize;
        letters[pos] = (letters[pos] + 1 + rng.next(alphabet_len - 1)) % alphabet_len;
        words.push(spell(&letters));
    }
    words
}

/// Two dense families (shared stem plus random suffix) joined by a short
/// bridge ladder. Worst case for "find path through bottleneck."
fn gen_clusters(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(99999);
    let half = word_count.saturating_sub(4) / 2;
    let mut words = Vec::with_capacity(word_count);

    for _ in 0..half {
        words.push(format!("AA{}", random_word(&mut rng, 2, 3)));
    }
    // Bridge: AAAA -> BAAA -> BBAA -> BBBA -> BBBB
    for bridge in ["AAAA", "BAAA", "BBAA", "BBBA", "BBBB"] {
        words.push(bridge.to_string());
    }
    for _ in 0..half {
        words.push(format!("BB{}", random_word(&mut rng, 2, 3)));
    }
    words
}
