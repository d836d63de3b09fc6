//! Word sources: where the vocabulary comes from.
//!
//! Every source yields canonical words (trimmed, non-blank, uppercase) in
//! first-occurrence order with duplicates removed.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::adjacency::canonicalize;
use crate::error::{LadderError, Result};

/// Anything that can hand the core a vocabulary.
pub trait WordSource {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> String;

    /// Read the full vocabulary. Either every word or an error; never a
    /// partial list.
    fn words(&self) -> Result<Vec<String>>;
}

/// A dictionary file with one word per line.
#[derive(Debug, Clone)]
pub struct DictionaryFile {
    path: PathBuf,
}

impl DictionaryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for DictionaryFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn words(&self) -> Result<Vec<String>> {
        let unavailable = |e: io::Error| LadderError::SourceUnavailable {
            source_name: self.name(),
            reason: e.to_string(),
        };
        let file = File::open(&self.path).map_err(unavailable)?;
        normalize_lines(BufReader::new(file)).map_err(unavailable)
    }
}

/// An in-memory list of raw words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for WordList {
    fn name(&self) -> String {
        format!("<{} in-memory words>", self.words.len())
    }

    fn words(&self) -> Result<Vec<String>> {
        Ok(dedup_canonical(self.words.iter().map(String::as_str)))
    }
}

/// Read lines, canonicalize, drop blanks and repeats.
///
/// Fails on the first I/O or UTF-8 error.
pub fn normalize_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(dedup_canonical(lines.iter().map(String::as_str)))
}

fn dedup_canonical<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.filter_map(canonicalize)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_normalize_lines() {
        let input = "cat\n  hat \n\n\tHate\n   \n";
        let words = normalize_lines(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["CAT", "HAT", "HATE"]);
    }

    #[test]
    fn test_normalize_dedups_first_wins() {
        let input = "hat\ncat\nHAT\nCat\nbat\n";
        let words = normalize_lines(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["HAT", "CAT", "BAT"]);
    }

    #[test]
    fn test_normalize_crlf() {
        let words = normalize_lines(Cursor::new("cat\r\nhat\r\n")).unwrap();
        assert_eq!(words, vec!["CAT", "HAT"]);
    }

    #[test]
    fn test_normalize_invalid_utf8() {
        let bytes: &[u8] = &[b'c', b'a', b't', b'\n', 0xff, 0xfe, b'\n'];
        assert!(normalize_lines(Cursor::new(bytes)).is_err());
    }

    #[test]
    fn test_word_list() {
        let source = WordList::new(["cat", " hat", "", "CAT"]);
        assert_eq!(source.words().unwrap(), vec!["CAT", "HAT"]);
    }

    #[test]
    fn test_missing_file_unavailable() {
        let source = DictionaryFile::new("/nonexistent/dir/words.txt");
        match source.words() {
            Err(LadderError::SourceUnavailable { source_name, .. }) => {
                assert!(source_name.contains("words.txt"));
            }
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }
}
