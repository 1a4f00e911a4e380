//! Session state for one game.
//!
//! A [`Session`] owns the active root word and the words accepted so far.
//! Every submission goes through the stateless [`Validator`]; the session only
//! applies the decision to its history.

use serde::Serialize;
use tracing::{debug, info};

use wordplay_model::{Candidate, GameOptions, History, RootWord, ValidationOutcome};
use wordplay_validate::{SpellChecker, Validator};

/// One game in progress.
///
/// The spell checker is borrowed; the caller owns it and may share it between
/// sessions.
pub struct Session<'a, O: ?Sized> {
    validator: Validator<'a, O>,
    root: RootWord,
    history: History,
}

impl<'a, O> Session<'a, O>
where
    O: SpellChecker + ?Sized,
{
    /// Begin a session on `root` using the default language.
    pub fn new(checker: &'a O, root: RootWord) -> Self {
        Self::with_options(checker, root, &GameOptions::default())
    }

    pub fn with_options(checker: &'a O, root: RootWord, options: &GameOptions) -> Self {
        info!(root = %root, language = %options.language, "session started");
        Self {
            validator: Validator::new(checker).with_language(options.language.clone()),
            root,
            history: History::new(),
        }
    }

    /// Switch to a new root word and forget every accepted word.
    pub fn start(&mut self, root: RootWord) {
        info!(
            root = %root,
            previous = %self.root,
            discarded = self.history.len(),
            "session restarted"
        );
        self.root = root;
        self.history = History::new();
    }

    /// Normalize and judge `raw`, recording it when accepted.
    pub fn submit(&mut self, raw: &str) -> ValidationOutcome {
        let candidate = Candidate::new(raw);
        let outcome = self.validator.validate(&self.root, &self.history, &candidate);
        match outcome {
            ValidationOutcome::Accepted => {
                info!(
                    letters = candidate.letter_count(),
                    total = self.history.len() + 1,
                    "word accepted"
                );
                self.history.record(candidate);
            }
            ValidationOutcome::Rejected(reason) => {
                debug!(reason = reason.code(), "word rejected");
            }
        }
        outcome
    }

    pub fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn language(&self) -> &str {
        self.validator.language()
    }

    /// Copy of the observable state, detached from the spell checker.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            root: self.root.clone(),
            words: self.history.words().to_vec(),
        }
    }
}

/// Plain view of a session, most recent word first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub root: RootWord,
    pub words: Vec<String>,
}
