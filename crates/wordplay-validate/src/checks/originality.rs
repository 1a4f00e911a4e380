//! Originality check.
//!
//! A word counts once per session. History entries are normalized, so an exact
//! match on the normalized candidate is a case-insensitive match.

use wordplay_model::{Candidate, History, Rejection};

pub fn check(history: &History, candidate: &Candidate) -> Result<(), Rejection> {
    if history.contains(candidate) {
        return Err(Rejection::AlreadyUsed);
    }
    Ok(())
}
