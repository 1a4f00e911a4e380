#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// The word a session is played against.
///
/// Always lowercase, non-empty and made only of alphabetic characters.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct RootWord(pub(crate) String);

impl RootWord {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let normalized = normalize(&value);
        if normalized.is_empty() {
            return Err(ModelError::EmptyRootWord);
        }
        if !normalized.chars().all(char::is_alphabetic) {
            return Err(ModelError::InvalidRootWord(value));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (not bytes) in the word.
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for RootWord {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RootWord> for String {
    fn from(value: RootWord) -> Self {
        value.0
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw user input after trimming and case folding.
///
/// Construction never fails; an all-whitespace input yields an empty candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Candidate(String);

impl Candidate {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Candidate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Candidate {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<Candidate> for String {
    fn from(value: Candidate) -> Self {
        value.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_is_trimmed_and_lowercased() {
        let root = RootWord::new("  SilkWorm\n").unwrap();
        assert_eq!(root.as_str(), "silkworm");
        assert_eq!(root.letter_count(), 8);
    }

    #[test]
    fn root_word_rejects_empty_and_non_alphabetic() {
        assert_eq!(RootWord::new("   "), Err(ModelError::EmptyRootWord));
        assert_eq!(
            RootWord::new("two words"),
            Err(ModelError::InvalidRootWord("two words".to_string()))
        );
        assert!(RootWord::new("abc1").is_err());
    }

    #[test]
    fn root_word_deserialize_enforces_invariant() {
        let ok: RootWord = serde_json::from_str("\"Listen\"").unwrap();
        assert_eq!(ok.as_str(), "listen");
        assert!(serde_json::from_str::<RootWord>("\"\"").is_err());
    }

    #[test]
    fn candidate_normalization_is_idempotent() {
        let once = Candidate::new("\t Tinsel  \n");
        let twice = Candidate::new(once.as_str());
        assert_eq!(once.as_str(), "tinsel");
        assert_eq!(once, twice);
    }

    #[test]
    fn whitespace_candidate_is_empty() {
        assert!(Candidate::new(" \n\t ").is_empty());
    }
}
