//! Word list handling.
//!
//! Provides a `WordList` type — 2048 words with an O(1) reverse index —
//! and the bundled English list. Encoding maps 11-bit groups to words by
//! position; decoding looks words up through the reverse index, so lookup
//! cost does not depend on word position.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Bip39Error;

/// Number of words in a valid list (2^11, one word per 11-bit index).
pub const WORDLIST_SIZE: usize = 2048;

/// Bundled English word list, one word per line, alphabetical.
const ENGLISH_WORDS: &str = include_str!("english.txt");

static ENGLISH: LazyLock<WordList> = LazyLock::new(|| {
    let words = ENGLISH_WORDS
        .lines()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    WordList::new(words).expect("bundled English word list is valid")
});

/// A 2048-word list with constant-time index lookup in both directions.
///
/// Words are held in index order for encoding; a reverse map serves
/// decoding. Lists are validated on construction, so lookups never fail
/// for in-range indices.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl WordList {
    /// Build a word list from a vector of words.
    ///
    /// # Arguments
    /// * `words` - Exactly 2048 distinct words in index order.
    ///
    /// # Returns
    /// `Ok(WordList)` on success, or `InvalidWordList` for a list of the
    /// wrong size or with duplicate words.
    pub fn new(words: Vec<String>) -> Result<Self, Bip39Error> {
        if words.len() != WORDLIST_SIZE {
            return Err(Bip39Error::InvalidWordList(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }
        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(Bip39Error::InvalidWordList(format!(
                    "duplicate word: {word}"
                )));
            }
        }
        Ok(WordList { words, index })
    }

    /// The bundled English word list.
    ///
    /// Parsed once on first use and shared for the life of the process.
    pub fn english() -> &'static WordList {
        &ENGLISH
    }

    /// Look up the word at an index.
    ///
    /// # Arguments
    /// * `index` - A word index.
    ///
    /// # Returns
    /// `Some(word)` for indices below 2048, `None` otherwise.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Look up the index of a word.
    ///
    /// # Arguments
    /// * `word` - The word to look up.
    ///
    /// # Returns
    /// `Some(index)` if the word is in the list, `None` otherwise.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Check whether a word is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
