use crate::error::{LadderError, Result};

/// Normalize a raw word: trim surrounding whitespace and uppercase.
///
/// Returns None for blank input. Every word that reaches the graph or a
/// query goes through here, so "cat", " Cat " and "CAT" are one vertex.
pub fn canonicalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Decide whether two words are one character edit apart.
///
/// An edit is a substitution, an insertion, or a deletion. Comparison is
/// case-insensitive and works on chars, not bytes. Identical words are not
/// adjacent.
///
/// Errors with `InvalidArgument` if either word is empty.
pub fn is_adjacent(word1: &str, word2: &str) -> Result<bool> {
    if word1.is_empty() || word2.is_empty() {
        return Err(LadderError::InvalidArgument(
            "cannot compare an empty word".to_string(),
        ));
    }

    let a: Vec<char> = word1.to_uppercase().chars().collect();
    let b: Vec<char> = word2.to_uppercase().chars().collect();
    Ok(chars_adjacent(&a, &b))
}

/// Adjacency over words already split into canonical chars.
///
/// Population calls this directly so each word is uppercased and split
/// once instead of once per pair.
pub(crate) fn chars_adjacent(a: &[char], b: &[char]) -> bool {
    match a.len().abs_diff(b.len()) {
        0 => single_substitution(a, b),
        1 if a.len() > b.len() => single_insertion(a, b),
        1 => single_insertion(b, a),
        _ => false,
    }
}

/// Equal lengths: exactly one index-wise mismatch.
fn single_substitution(a: &[char], b: &[char]) -> bool {
    a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
}

/// `longer` is exactly one char longer than `shorter`. Walk both, allowing
/// one skipped position in `longer`; every other position must match.
fn single_insertion(longer: &[char], shorter: &[char]) -> bool {
    let mut skipped = false;
    let (mut i, mut j) = (0, 0);

    while j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
        } else if skipped {
            return false;
        } else {
            skipped = true;
            i += 1;
        }
    }

    // Never skipped: the extra char is the last one in `longer`.
    true
}
