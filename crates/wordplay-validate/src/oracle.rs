//! Dictionary lookup.
//!
//! The validator never decides on its own whether a word exists. It asks a
//! [`SpellChecker`], which can be a platform service, a closure in tests, or
//! the offline [`WordListDictionary`].

use std::collections::HashMap;

use crate::util::CaseInsensitiveSet;

/// Authoritative answer to "is this a correctly spelled word in `language`?".
pub trait SpellChecker {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// In-memory dictionary keyed by language tag.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    languages: HashMap<String, CaseInsensitiveSet>,
}

impl WordListDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words for a language, merging with any already present.
    #[must_use]
    pub fn with_words<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(language, words);
        self
    }

    pub fn extend<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages
            .entry(language_key(language))
            .or_default()
            .extend(words);
    }

    /// Number of words known for a language.
    pub fn word_count(&self, language: &str) -> usize {
        self.languages
            .get(&language_key(language))
            .map_or(0, CaseInsensitiveSet::len)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(&language_key(language))
    }
}

impl SpellChecker for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.languages
            .get(&language_key(language))
            .is_some_and(|words| words.contains(word))
    }
}

fn language_key(language: &str) -> String {
    language.trim().to_ascii_lowercase()
}
