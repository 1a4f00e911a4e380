//! Resolve configuration into the pieces a game needs.
//!
//! Precedence: command-line flags, then the config file, then bundled
//! defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use wordplay_model::{GameOptions, RootWord};
use wordplay_validate::WordListDictionary;
use wordplay_words::{WordsConfig, load_dictionary, root_or_fallback};

/// Source overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub config: Option<PathBuf>,
    pub word_list: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub language: Option<String>,
}

/// Everything needed to start sessions.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub options: GameOptions,
    pub word_list: PathBuf,
    pub dictionary_path: PathBuf,
    pub dictionary: WordListDictionary,
}

impl GameSetup {
    /// Load the config file and dictionary.
    ///
    /// The word list is only read when a root is needed, so a missing list is
    /// not an error here.
    pub fn load(overrides: &SourceOverrides) -> Result<Self> {
        let config = WordsConfig::discover(overrides.config.as_deref()).context("load config")?;
        let mut options = config.game_options();
        if let Some(language) = &overrides.language {
            options = options.with_language(language.trim());
        }
        let word_list = overrides
            .word_list
            .clone()
            .unwrap_or_else(|| config.word_list_path());
        let dictionary_path = overrides
            .dictionary
            .clone()
            .unwrap_or_else(|| config.dictionary_path(&options.language));
        let dictionary = load_dictionary(&dictionary_path, &options.language)
            .with_context(|| format!("load dictionary for language '{}'", options.language))?;
        debug!(
            word_list = %word_list.display(),
            dictionary = %dictionary_path.display(),
            language = %options.language,
            "game setup resolved"
        );
        Ok(Self {
            options,
            word_list,
            dictionary_path,
            dictionary,
        })
    }

    /// Use `explicit` when given, otherwise draw a root from the word list.
    pub fn pick_root<R>(&self, explicit: Option<&str>, rng: &mut R) -> Result<RootWord>
    where
        R: Rng + ?Sized,
    {
        match explicit {
            Some(word) => RootWord::new(word).with_context(|| format!("invalid root '{word}'")),
            None => Ok(self.next_root(rng)),
        }
    }

    /// Draw a root from the word list, falling back to the configured default.
    pub fn next_root<R>(&self, rng: &mut R) -> RootWord
    where
        R: Rng + ?Sized,
    {
        root_or_fallback(&self.word_list, &self.options, rng)
    }
}
