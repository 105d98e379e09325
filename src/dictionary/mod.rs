//! Dictionary of valid ladder words
//!
//! Loads and normalizes a word list, answers membership queries and draws
//! uniformly random distinct word pairs. A dictionary is built once at
//! startup and immutable afterward, so it can be shared read-only by any
//! number of sessions and solver runs.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LEN, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// An immutable set of unique ladder words
///
/// Keeps both a `Vec` (stable enumeration order, needed for deterministic
/// random sampling) and a hash set (O(1) membership).
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

/// Error type for dictionary construction and sampling
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io(io::Error),
    /// No words of the required length survived filtering
    Empty,
    /// A distinct pair was requested from fewer than two words
    TooFewWords(usize),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => {
                write!(f, "Word list contains no {WORD_LEN}-letter words")
            }
            Self::TooFewWords(n) => {
                write!(f, "Need at least 2 dictionary words for a pair, have {n}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty | Self::TooFewWords(_) => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Dictionary {
    /// Build a dictionary from an iterator of words, deduplicating while
    /// preserving first-occurrence order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the iterator yields no words.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();

        for word in words {
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: ordered,
            index,
        })
    }

    /// Load a dictionary from a newline-separated word list file
    ///
    /// Each line is trimmed and lowercased; entries that are not exactly
    /// `WORD_LEN` ASCII letters are skipped. The file handle is released
    /// before this returns.
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if no valid words survive filtering.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;

        let words = content
            .lines()
            .filter_map(|line| Word::new(line.trim()).ok());

        Self::from_words(words)
    }

    /// Build the dictionary from the bundled word list
    ///
    /// # Panics
    /// Will not panic - the bundled list is generated at build time and
    /// non-empty.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_words(WORDS.iter().filter_map(|&s| Word::new(s).ok()))
            .expect("bundled word list is non-empty")
    }

    /// Check membership of an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Check whether raw text is a valid dictionary word
    ///
    /// Case-insensitive; false for anything that is not exactly `WORD_LEN`
    /// ASCII letters.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.index.contains(&word))
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    ///
    /// Always false for a constructed dictionary, but kept for API symmetry
    /// with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in stable enumeration order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The words in stable enumeration order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw two different words, uniform over ordered distinct pairs
    ///
    /// Draws the first index over `[0, n)` and the second over `[0, n-1)`,
    /// bumping the second past the first when they collide. This maps the
    /// two draws onto a uniform distinct pair without rejection sampling.
    ///
    /// # Errors
    /// Returns `DictionaryError::TooFewWords` if the dictionary holds fewer
    /// than two words.
    pub fn random_distinct_pair(
        &self,
        rng: &mut impl Rng,
    ) -> Result<(Word, Word), DictionaryError> {
        let n = self.words.len();
        if n < 2 {
            return Err(DictionaryError::TooFewWords(n));
        }

        let first = rng.random_range(0..n);
        let mut second = rng.random_range(0..n - 1);
        if second >= first {
            second += 1;
        }

        Ok((self.words[first].clone(), self.words[second].clone()))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|&s| Word::new(s).unwrap())).unwrap()
    }

    #[test]
    fn from_words_dedupes_preserving_order() {
        let d = dict(&["cold", "warm", "cold", "cord"]);
        assert_eq!(d.len(), 3);
        let texts: Vec<&str> = d.iter().map(Word::text).collect();
        assert_eq!(texts, ["cold", "warm", "cord"]);
    }

    #[test]
    fn from_words_empty_is_error() {
        let result = Dictionary::from_words(std::iter::empty());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn load_from_file_filters_and_normalizes() {
        let path = std::env::temp_dir().join("word_ladder_dict_test.txt");
        fs::write(&path, "  COLD \nwarm\ntoolong\ncat\n\nwarm\ncord\n").unwrap();

        let d = Dictionary::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(d.len(), 3);
        assert!(d.is_valid("cold"));
        assert!(d.is_valid("warm"));
        assert!(d.is_valid("cord"));
        assert!(!d.is_valid("toolong"));
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let result = Dictionary::load_from_file("/no/such/word/list.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn load_from_file_only_invalid_entries_is_empty_error() {
        let path = std::env::temp_dir().join("word_ladder_dict_empty_test.txt");
        fs::write(&path, "toolong\ncat\n123x\n").unwrap();

        let result = Dictionary::load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn is_valid_case_insensitive() {
        let d = dict(&["cold"]);
        assert!(d.is_valid("cold"));
        assert!(d.is_valid("COLD"));
        assert!(d.is_valid("CoLd"));
        assert!(!d.is_valid("warm"));
        assert!(!d.is_valid("col"));
    }

    #[test]
    fn bundled_dictionary_is_usable() {
        let d = Dictionary::bundled();
        assert!(d.len() >= 2);
        assert_eq!(d.len(), WORDS_COUNT);
        assert!(d.is_valid("cold"));
    }

    #[test]
    fn random_pair_always_distinct() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let (a, b) = d.random_distinct_pair(&mut rng).unwrap();
            assert_ne!(a, b);
            assert!(d.contains(&a));
            assert!(d.contains(&b));
        }
    }

    #[test]
    fn random_pair_covers_both_orderings() {
        let d = dict(&["cold", "warm"]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut saw_forward = false;
        let mut saw_reverse = false;
        for _ in 0..100 {
            let (a, b) = d.random_distinct_pair(&mut rng).unwrap();
            match (a.text(), b.text()) {
                ("cold", "warm") => saw_forward = true,
                ("warm", "cold") => saw_reverse = true,
                other => panic!("unexpected pair {other:?}"),
            }
        }
        assert!(saw_forward && saw_reverse);
    }

    #[test]
    fn random_pair_requires_two_words() {
        let d = dict(&["cold"]);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..10 {
            assert!(matches!(
                d.random_distinct_pair(&mut rng),
                Err(DictionaryError::TooFewWords(1))
            ));
        }
    }
}
