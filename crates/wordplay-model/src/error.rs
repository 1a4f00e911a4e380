use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("root word must not be empty")]
    EmptyRootWord,
    #[error("root word must contain only letters: {0:?}")]
    InvalidRootWord(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
