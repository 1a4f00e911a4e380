//! CLI argument definitions for the word game.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wordplay_cli::setup::SourceOverrides;

#[derive(Parser)]
#[command(
    name = "wordplay",
    version,
    about = "Find words hidden in a root word",
    long_about = "Find words that can be spelled from the letters of a root word.\n\n\
                  Each letter of the root may be used once, the root itself does not count,\n\
                  and every word must be in the dictionary and new to the session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Config file (default: ./wordplay.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Root word list, one word per line.
    #[arg(long = "word-list", value_name = "PATH", global = true)]
    pub word_list: Option<PathBuf>,

    /// Dictionary file, one word per line.
    #[arg(long = "dictionary", value_name = "PATH", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Dictionary language tag.
    #[arg(long = "language", value_name = "TAG", global = true)]
    pub language: Option<String>,
}

impl SourceArgs {
    pub fn overrides(&self) -> SourceOverrides {
        SourceOverrides {
            config: self.config.clone(),
            word_list: self.word_list.clone(),
            dictionary: self.dictionary.clone(),
            language: self.language.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Play interactively, reading one word per line from stdin.
    Play(PlayArgs),

    /// Validate a list of words against one root and print the results.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct PlayArgs {
    /// Root word to play (default: random pick from the word list).
    #[arg(long = "root", value_name = "WORD")]
    pub root: Option<String>,

    /// Seed for the root word picker.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Root word to check against (default: random pick from the word list).
    #[arg(long = "root", value_name = "WORD")]
    pub root: Option<String>,

    /// Seed for the root word picker.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: CheckFormatArg,

    /// Words to submit, in order.
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CheckFormatArg {
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
