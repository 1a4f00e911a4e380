//! Accepted words for a session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::word::Candidate;

/// Ordered, duplicate-free list of accepted words, most recent first.
///
/// Membership is case-insensitive because every stored word is a normalized
/// [`Candidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct History {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the word was already accepted.
    pub fn contains(&self, word: &Candidate) -> bool {
        self.seen.contains(word.as_str())
    }

    /// Record an accepted word at the front of the list.
    ///
    /// Returns `false` and leaves the history untouched when the word is empty
    /// or already present.
    pub fn record(&mut self, word: Candidate) -> bool {
        if word.is_empty() || self.contains(&word) {
            return false;
        }
        let word = word.into_string();
        self.seen.insert(word.clone());
        self.words.insert(0, word);
        true
    }

    /// Accepted words, most recent first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for History {
    /// Rebuild a history from a most-recent-first list, dropping blanks and
    /// repeated entries.
    fn from(words: Vec<String>) -> Self {
        let mut history = Self::new();
        for word in words.into_iter().rev() {
            history.record(Candidate::new(&word));
        }
        history
    }
}

impl From<History> for Vec<String> {
    fn from(history: History) -> Self {
        history.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut history = History::new();
        assert!(history.record(Candidate::new("a")));
        assert!(history.record(Candidate::new("b")));
        assert_eq!(history.words(), ["b", "a"]);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut history = History::new();
        assert!(history.record(Candidate::new("silk")));
        assert!(!history.record(Candidate::new("SILK ")));
        assert_eq!(history.len(), 1);
        assert!(history.contains(&Candidate::new("Silk")));
    }

    #[test]
    fn empty_words_are_never_recorded() {
        let mut history = History::new();
        assert!(!history.record(Candidate::new("   ")));
        assert!(history.is_empty());
    }

    #[test]
    fn rebuild_from_list_keeps_order() {
        let history = History::from(vec!["worm".to_string(), "silk".to_string()]);
        assert_eq!(history.words(), ["worm", "silk"]);
        assert!(history.contains(&Candidate::new("silk")));
    }
}
