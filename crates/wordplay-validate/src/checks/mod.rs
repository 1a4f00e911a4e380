//! Validation check modules.
//!
//! Each module performs one stage of the pipeline. Stages run in a fixed
//! order because the first failure decides what the player is told.

mod dictionary;
mod identity;
pub(crate) mod letters;
mod originality;
mod presence;

use tracing::debug;
use wordplay_model::{Candidate, History, Rejection, RootWord};

use crate::oracle::SpellChecker;

/// Run every check in order, stopping at the first rejection.
pub(crate) fn run_all<O>(
    root: &RootWord,
    history: &History,
    candidate: &Candidate,
    checker: &O,
    language: &str,
) -> Result<(), Rejection>
where
    O: SpellChecker + ?Sized,
{
    // 1. Blank input
    presence::check(candidate)?;

    // 2. Already played this session
    originality::check(history, candidate)?;

    // 3. Spelling the root itself
    identity::check(root, candidate)?;

    // 4. Letters available in the root
    letters::check(root, candidate)?;
    debug!(stage = "letters", "candidate spelled from root");

    // 5. Dictionary membership (the only external call)
    dictionary::check(checker, candidate, language)
}
