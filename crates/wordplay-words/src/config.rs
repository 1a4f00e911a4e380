//! Optional TOML configuration file.
//!
//! ```toml
//! language = "en"
//! fallback_root = "silkworm"
//! word_list = "words/start.txt"
//! dictionary = "words/en.txt"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use wordplay_model::{GameOptions, RootWord};

use crate::error::WordsError;
use crate::paths::{default_dictionary_path, default_word_list_path};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "wordplay.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    pub language: Option<String>,
    pub fallback_root: Option<String>,
    pub word_list: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
}

impl WordsConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, WordsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| WordsError::io(path, e))?;
        let mut config: Self = toml::from_str(&contents).map_err(|source| WordsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.word_list = config.word_list.map(|p| resolve(base, p));
            config.dictionary = config.dictionary.map(|p| resolve(base, p));
        }
        config.validate(path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` when given, else `wordplay.toml` in the working directory if
    /// it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, WordsError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }
        Ok(Self::default())
    }

    fn validate(&self, path: &Path) -> Result<(), WordsError> {
        if let Some(language) = &self.language
            && language.trim().is_empty()
        {
            return Err(WordsError::InvalidConfig {
                path: path.to_path_buf(),
                message: "language must not be empty".to_string(),
            });
        }
        if let Some(root) = &self.fallback_root {
            RootWord::new(root.as_str()).map_err(|error| WordsError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("fallback_root: {error}"),
            })?;
        }
        Ok(())
    }

    /// Game options with config values applied over the defaults.
    pub fn game_options(&self) -> GameOptions {
        let mut options = GameOptions::default();
        if let Some(language) = &self.language {
            options = options.with_language(language.trim());
        }
        if let Some(root) = self
            .fallback_root
            .as_deref()
            .and_then(|root| RootWord::new(root).ok())
        {
            options = options.with_fallback_root(root);
        }
        options
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.word_list.clone().unwrap_or_else(default_word_list_path)
    }

    pub fn dictionary_path(&self, language: &str) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| default_dictionary_path(language))
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_keys() {
        let config: WordsConfig = toml::from_str(
            r#"
language = "nl"
fallback_root = "Zijderups"
word_list = "/tmp/start.txt"
"#,
        )
        .unwrap();
        assert_eq!(config.language.as_deref(), Some("nl"));
        assert_eq!(config.word_list_path(), PathBuf::from("/tmp/start.txt"));

        let options = config.game_options();
        assert_eq!(options.language, "nl");
        assert_eq!(options.fallback_root.as_str(), "zijderups");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<WordsConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let options = WordsConfig::default().game_options();
        assert_eq!(options, GameOptions::default());
    }
}
