use wordplay_model::{Candidate, Rejection};

pub fn check(candidate: &Candidate) -> Result<(), Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    Ok(())
}
