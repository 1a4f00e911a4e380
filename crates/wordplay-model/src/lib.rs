pub mod error;
pub mod history;
pub mod options;
pub mod outcome;
pub mod word;

pub use error::{ModelError, Result};
pub use history::History;
pub use options::{DEFAULT_FALLBACK_ROOT, DEFAULT_LANGUAGE, GameOptions};
pub use outcome::{Rejection, ValidationOutcome};
pub use word::{Candidate, RootWord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes() {
        let outcome = ValidationOutcome::Rejected(Rejection::NotAWord);
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let round: ValidationOutcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round, outcome);
    }

    #[test]
    fn default_options_use_english_and_silkworm() {
        let options = GameOptions::default();
        assert_eq!(options.language, "en");
        assert_eq!(options.fallback_root.as_str(), "silkworm");
    }
}
