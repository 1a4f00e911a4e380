//! Configuration options for a game.

use serde::{Deserialize, Serialize};

use crate::word::RootWord;

/// Language tag handed to the dictionary when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Root used when no word list is available.
pub const DEFAULT_FALLBACK_ROOT: &str = "silkworm";

/// Options controlling how a game is set up and validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Language passed to the dictionary for membership checks.
    pub language: String,

    /// Root word used when the word list cannot provide one.
    pub fallback_root: RootWord,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            fallback_root: RootWord(DEFAULT_FALLBACK_ROOT.to_string()),
        }
    }
}

impl GameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_fallback_root(mut self, root: RootWord) -> Self {
        self.fallback_root = root;
        self
    }
}
