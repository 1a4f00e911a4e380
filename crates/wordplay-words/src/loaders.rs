use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use wordplay_model::{GameOptions, RootWord};
use wordplay_validate::WordListDictionary;

use crate::error::WordsError;

/// Read a one-word-per-line file.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn read_words(path: &Path) -> Result<Vec<String>, WordsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| WordsError::io(path, e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Load the root words from a word list.
///
/// Entries that are not valid roots are skipped. A list without a single
/// usable root is an error.
pub fn load_word_list(path: &Path) -> Result<Vec<RootWord>, WordsError> {
    let lines = read_words(path)?;
    let total = lines.len();
    let roots: Vec<RootWord> = lines
        .into_iter()
        .filter_map(|line| RootWord::new(line).ok())
        .collect();
    let skipped = total - roots.len();
    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped invalid root words");
    }
    if roots.is_empty() {
        return Err(WordsError::EmptyWordList {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), count = roots.len(), "loaded word list");
    Ok(roots)
}

/// Load a dictionary file for one language.
pub fn load_dictionary(path: &Path, language: &str) -> Result<WordListDictionary, WordsError> {
    let words = read_words(path)?;
    let dictionary = WordListDictionary::new().with_words(language, &words);
    info!(
        path = %path.display(),
        language,
        words = dictionary.word_count(language),
        "loaded dictionary"
    );
    Ok(dictionary)
}

/// Pick a root word uniformly at random.
pub fn choose_root<R>(roots: &[RootWord], rng: &mut R) -> Option<RootWord>
where
    R: Rng + ?Sized,
{
    roots.choose(rng).cloned()
}

/// Pick a root from the word list, or fall back to the configured default.
///
/// Never fails: a missing, unreadable or empty list is logged and replaced by
/// `options.fallback_root`.
pub fn root_or_fallback<R>(word_list: &Path, options: &GameOptions, rng: &mut R) -> RootWord
where
    R: Rng + ?Sized,
{
    let roots = match load_word_list(word_list) {
        Ok(roots) => roots,
        Err(error) => {
            warn!(%error, fallback = %options.fallback_root, "using fallback root word");
            return options.fallback_root.clone();
        }
    };
    choose_root(&roots, rng).unwrap_or_else(|| options.fallback_root.clone())
}
