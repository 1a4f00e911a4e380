use tracing::{debug, trace};

use wordplay_model::{Candidate, DEFAULT_LANGUAGE, History, RootWord, ValidationOutcome};

use crate::checks;
use crate::oracle::SpellChecker;

/// Validation context: the dictionary to consult and its language.
///
/// Holds no session state, so the same validator can judge any root and
/// history.
pub struct Validator<'a, O: ?Sized> {
    checker: &'a O,
    language: String,
}

impl<'a, O> Validator<'a, O>
where
    O: SpellChecker + ?Sized,
{
    /// Create a validator using the default language.
    pub fn new(checker: &'a O) -> Self {
        Self {
            checker,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the language passed to the spell checker.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Judge a candidate against a root word and the words already played.
    pub fn validate(
        &self,
        root: &RootWord,
        history: &History,
        candidate: &Candidate,
    ) -> ValidationOutcome {
        trace!(root = %root, candidate = %candidate, "validating candidate");
        match checks::run_all(root, history, candidate, self.checker, &self.language) {
            Ok(()) => ValidationOutcome::Accepted,
            Err(reason) => {
                debug!(reason = reason.code(), "candidate rejected");
                ValidationOutcome::Rejected(reason)
            }
        }
    }
}

/// Validate a single candidate without building a [`Validator`].
pub fn validate<O>(
    root: &RootWord,
    history: &History,
    candidate: &Candidate,
    checker: &O,
    language: &str,
) -> ValidationOutcome
where
    O: SpellChecker + ?Sized,
{
    Validator::new(checker)
        .with_language(language)
        .validate(root, history, candidate)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use wordplay_model::Rejection;

    use super::*;
    use crate::oracle::WordListDictionary;

    fn root(word: &str) -> RootWord {
        RootWord::new(word).unwrap()
    }

    #[test]
    fn originality_wins_over_identity() {
        // A history can only hold the root if it was seeded externally; the
        // originality stage still runs first.
        let history = History::from(vec!["silkworm".to_string()]);
        let dictionary = WordListDictionary::new().with_words("en", ["silkworm"]);
        let outcome = Validator::new(&dictionary).validate(
            &root("silkworm"),
            &history,
            &Candidate::new("silkworm"),
        );
        assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn dictionary_is_consulted_only_after_letters_pass() {
        let calls = Cell::new(0);
        let checker = |_: &str, _: &str| {
            calls.set(calls.get() + 1);
            true
        };
        let validator = Validator::new(&checker);
        let history = History::new();

        let outcome = validator.validate(&root("silkworm"), &history, &Candidate::new("zebra"));
        assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::NotDerived));
        assert_eq!(calls.get(), 0);

        let outcome = validator.validate(&root("silkworm"), &history, &Candidate::new("silk"));
        assert_eq!(outcome, ValidationOutcome::Accepted);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn language_is_forwarded() {
        let checker = |_: &str, language: &str| language == "nl";
        let history = History::new();
        let candidate = Candidate::new("silk");

        let english = Validator::new(&checker).validate(&root("silkworm"), &history, &candidate);
        assert_eq!(english, ValidationOutcome::Rejected(Rejection::NotAWord));

        let dutch = Validator::new(&checker)
            .with_language("nl")
            .validate(&root("silkworm"), &history, &candidate);
        assert_eq!(dutch, ValidationOutcome::Accepted);
    }
}
