#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::config::WordsConfig;
pub use crate::error::WordsError;
pub use crate::loaders::{
    choose_root, load_dictionary, load_word_list, read_words, root_or_fallback,
};
pub use crate::paths::{
    WORDS_ENV_VAR, default_dictionary_path, default_word_list_path, words_root,
};
