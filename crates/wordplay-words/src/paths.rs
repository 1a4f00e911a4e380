//! Word source path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the words directory.
pub const WORDS_ENV_VAR: &str = "WORDPLAY_WORDS_DIR";

/// Get the words root directory.
///
/// Resolution order:
/// 1. `WORDPLAY_WORDS_DIR` environment variable
/// 2. `words/` directory relative to workspace root
pub fn words_root() -> PathBuf {
    if let Ok(root) = std::env::var(WORDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../words")
}

/// Bundled list of root words, one per line.
pub fn default_word_list_path() -> PathBuf {
    words_root().join("start.txt")
}

/// Bundled dictionary for a language, one word per line.
pub fn default_dictionary_path(language: &str) -> PathBuf {
    words_root().join(format!("{}.txt", language.trim().to_ascii_lowercase()))
}
