//! The root word is not a derivation of itself.

use wordplay_model::{Candidate, Rejection, RootWord};

pub fn check(root: &RootWord, candidate: &Candidate) -> Result<(), Rejection> {
    if candidate.as_str() == root.as_str() {
        return Err(Rejection::NotDerived);
    }
    Ok(())
}
