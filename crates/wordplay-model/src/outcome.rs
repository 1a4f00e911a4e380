//! Validation outcome types.
//!
//! A rejection is an ordinary result of user input, not a fault, so it is
//! carried as a value rather than an error.

use serde::{Deserialize, Serialize};

use crate::word::RootWord;

/// Why a candidate was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Blank input. Callers treat this as a no-op.
    Empty,
    /// The word was already accepted in this session.
    AlreadyUsed,
    /// The word is the root itself or cannot be spelled from its letters.
    NotDerived,
    /// The dictionary does not know the word.
    NotAWord,
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::AlreadyUsed => "already_used",
            Self::NotDerived => "not_derived",
            Self::NotAWord => "not_a_word",
        }
    }

    /// Whether the player should be told about this rejection.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Short alert title, `None` for silent rejections.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::AlreadyUsed => Some("Word already used"),
            Self::NotDerived => Some("Word not possible"),
            Self::NotAWord => Some("Word not recognized"),
        }
    }

    /// Alert message shown below the title.
    pub fn message(&self, root: &RootWord) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::AlreadyUsed => Some("Be more original!".to_string()),
            Self::NotDerived => Some(format!("You can't spell that from '{root}'!")),
            Self::NotAWord => Some("Please, insert a real word!".to_string()),
        }
    }
}

/// Result of running a candidate through the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Rejection> for ValidationOutcome {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rejection_is_silent() {
        let root = RootWord::new("silkworm").unwrap();
        assert!(!Rejection::Empty.is_user_visible());
        assert_eq!(Rejection::Empty.title(), None);
        assert_eq!(Rejection::Empty.message(&root), None);
    }

    #[test]
    fn not_derived_message_names_the_root() {
        let root = RootWord::new("silkworm").unwrap();
        assert_eq!(Rejection::NotDerived.title(), Some("Word not possible"));
        assert_eq!(
            Rejection::NotDerived.message(&root).as_deref(),
            Some("You can't spell that from 'silkworm'!")
        );
    }

    #[test]
    fn outcome_accessors() {
        assert!(ValidationOutcome::Accepted.is_accepted());
        assert_eq!(ValidationOutcome::Accepted.rejection(), None);
        let rejected = ValidationOutcome::from(Rejection::AlreadyUsed);
        assert_eq!(rejected.rejection(), Some(Rejection::AlreadyUsed));
    }
}
