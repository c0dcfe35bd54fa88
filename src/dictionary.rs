//! Root-word dictionary.
//!
//! The engine only ever asks one question of a dictionary: is this word a
//! known root? That question is the [`Lexicon`] trait. [`Dictionary`] is the
//! bundled implementation, a lowercase hash set with setup-time maintenance
//! and a plain-text loader (one root per line).

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Membership test over root words. Input is already lowercase.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for std::sync::Arc<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Lexicon for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// A set of root words, lowercased on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.add(words);
        dictionary
    }

    /// Read one root per line. Lines are trimmed and lowercased; blank lines
    /// and `#` comments are skipped. An entry with inner whitespace is an
    /// error, reported with its 1-based line number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.chars().any(char::is_whitespace) {
                return Err(Error::Dictionary {
                    line: idx + 1,
                    reason: format!("entry '{}' contains whitespace", entry),
                });
            }
            dictionary.words.insert(entry.to_lowercase());
        }

        tracing::debug!(entries = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "loading dictionary");
        Self::from_reader(file)
    }

    /// Insert roots. Entries are trimmed and lowercased; empty ones are skipped.
    pub fn add<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn add_and_remove_are_case_normalized() {
        let mut dict = Dictionary::from_words(["Makan", "jual"]);
        assert!(dict.contains("makan"));
        assert!(!dict.contains("Makan"));
        assert_eq!(dict.len(), 2);

        dict.remove(["MAKAN"]);
        assert!(!dict.contains("makan"));
        assert_eq!(dict.len(), 1);

        dict.add(["ajar"]);
        let mut words: Vec<&str> = dict.words().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["ajar", "jual"]);
    }

    #[test]
    fn blank_entries_are_never_added() {
        let mut dict = Dictionary::from_words(["", "  ", " pun "]);
        dict.add([""]);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("pun"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn reader_skips_blank_lines_and_comments() {
        let input = "# roots\nmakan\n\n  Jual  \najar\n";
        let dict = Dictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("jual"));
    }

    #[test]
    fn reader_rejects_multi_word_entries() {
        let input = "makan\nrumah sakit\n";
        let err = Dictionary::from_reader(input.as_bytes()).unwrap_err();
        match err {
            Error::Dictionary { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rusak").unwrap();
        writeln!(file, "pelajar").unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert!(dict.contains("rusak"));
        assert!(dict.contains("pelajar"));
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dictionary::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn std_sets_are_lexicons() {
        let set: HashSet<String> = ["makan".to_string()].into_iter().collect();
        assert!(Lexicon::contains(&set, "makan"));

        let tree: BTreeSet<String> = ["jual".to_string()].into_iter().collect();
        assert!(Lexicon::contains(&&tree, "jual"));
    }
}
