//! Letter feasibility.
//!
//! A candidate is feasible when it can be built by taking letters out of a
//! working copy of the root, one per candidate letter. Each root letter is
//! usable once; order does not matter.

use wordplay_model::{Candidate, Rejection, RootWord};

pub fn check(root: &RootWord, candidate: &Candidate) -> Result<(), Rejection> {
    if can_spell(root.as_str(), candidate.as_str()) {
        Ok(())
    } else {
        Err(Rejection::NotDerived)
    }
}

/// Check whether `word` can be spelled from the letters of `letters`.
///
/// Comparison is case-insensitive. Fails as soon as a letter has no unused
/// occurrence left.
pub fn can_spell(letters: &str, word: &str) -> bool {
    let mut pool: Vec<char> = letters.chars().flat_map(char::to_lowercase).collect();
    for letter in word.chars().flat_map(char::to_lowercase) {
        let Some(pos) = pool.iter().position(|&available| available == letter) else {
            return false;
        };
        pool.swap_remove(pos);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_letters_are_counted() {
        assert!(can_spell("mississippi", "sip"));
        assert!(can_spell("mississippi", "sips"));
        assert!(can_spell("mississippi", "ssss"));
        assert!(!can_spell("mississippi", "sssss"));
        assert!(!can_spell("mississippi", "ppp"));
    }

    #[test]
    fn anagrams_are_feasible() {
        assert!(can_spell("listen", "tinsel"));
        assert!(can_spell("listen", "silent"));
    }

    #[test]
    fn foreign_letters_fail() {
        assert!(!can_spell("silkworm", "silky"));
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(can_spell("SilkWorm", "WORM"));
    }

    #[test]
    fn empty_word_is_trivially_feasible() {
        assert!(can_spell("silkworm", ""));
    }
}
