//! Property-based checks over random small vocabularies.

use proptest::prelude::*;
use word_ladder_core::{is_adjacent, WordLadder};

/// Short words over a tiny alphabet so that ladders actually form.
fn arb_word() -> impl Strategy<Value = String> {
    "[abc]{1,4}"
}

fn arb_vocab() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 1..25)
}

fn build(words: &[String]) -> WordLadder {
    let mut ladder = WordLadder::new();
    ladder.populate_words(words);
    ladder.precompute().unwrap();
    ladder
}

proptest! {
    #[test]
    fn adjacency_is_commutative(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(is_adjacent(&a, &b).unwrap(), is_adjacent(&b, &a).unwrap());
    }

    #[test]
    fn word_never_adjacent_to_itself(a in arb_word()) {
        prop_assert!(!is_adjacent(&a, &a).unwrap());
        prop_assert!(!is_adjacent(&a, &a.to_uppercase()).unwrap());
    }

    #[test]
    fn graph_adjacency_is_symmetric(words in arb_vocab()) {
        let ladder = build(&words);
        let graph = ladder.graph();
        for a in graph.all_vertices() {
            prop_assert!(!graph.is_adjacent(a.as_str(), a.as_str()));
            for b in graph.all_vertices() {
                prop_assert_eq!(
                    graph.is_adjacent(a.as_str(), b.as_str()),
                    graph.is_adjacent(b.as_str(), a.as_str())
                );
                // Edges are exactly the one-edit pairs
                prop_assert_eq!(
                    graph.is_adjacent(a.as_str(), b.as_str()),
                    is_adjacent(a, b).unwrap()
                );
            }
        }
    }

    #[test]
    fn paths_are_valid_ladders(words in arb_vocab()) {
        let ladder = build(&words);
        let graph = ladder.graph();
        let vocab: Vec<String> = graph.all_vertices().cloned().collect();

        for s in &vocab {
            for d in &vocab {
                if s == d {
                    continue;
                }
                if let Some(path) = ladder.shortest_path(s, d).unwrap() {
                    prop_assert!(path.len() >= 2);
                    prop_assert_eq!(path.first(), Some(s));
                    prop_assert_eq!(path.last(), Some(d));
                    for pair in path.windows(2) {
                        prop_assert!(graph.is_adjacent(pair[0].as_str(), pair[1].as_str()));
                    }
                }
            }
        }
    }

    #[test]
    fn distance_matches_path(words in arb_vocab()) {
        let ladder = build(&words);
        let vocab: Vec<String> = ladder.graph().all_vertices().cloned().collect();

        for s in &vocab {
            for d in &vocab {
                let distance = ladder.shortest_distance(s, d).unwrap();
                match ladder.shortest_path(s, d).unwrap() {
                    Some(path) if !path.is_empty() => {
                        prop_assert_eq!(distance, path.len() as i32 - 1);
                    }
                    _ => prop_assert_eq!(distance, -1),
                }
                if s == d {
                    prop_assert_eq!(distance, -1);
                }
                // Undirected graph: distance is symmetric
                prop_assert_eq!(distance, ladder.shortest_distance(d, s).unwrap());
            }
        }
    }

    #[test]
    fn neighborhood_agrees_with_table(words in arb_vocab()) {
        let ladder = build(&words);
        let start = ladder.graph().all_vertices().next().cloned().unwrap();
        for n in ladder.neighborhood(&start, u32::MAX).unwrap() {
            prop_assert_eq!(
                ladder.shortest_distance(&start, &n.vertex).unwrap(),
                n.distance as i32
            );
        }
    }
}
