use tracing::debug;
use wordplay_model::{Candidate, Rejection};

use crate::oracle::SpellChecker;

/// Ask the spell checker exactly once.
pub fn check<O>(checker: &O, candidate: &Candidate, language: &str) -> Result<(), Rejection>
where
    O: SpellChecker + ?Sized,
{
    let known = checker.is_real_word(candidate.as_str(), language);
    debug!(stage = "dictionary", language, known, "dictionary lookup");
    if known {
        Ok(())
    } else {
        Err(Rejection::NotAWord)
    }
}
