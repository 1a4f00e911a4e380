//! Wordplay CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::level_filters::LevelFilter;

use wordplay_cli::logging::{LogConfig, LogFormat, init_logging};
use wordplay_cli::play::{check_words, play};
use wordplay_cli::report::{render_json, render_plain};
use wordplay_cli::setup::GameSetup;
use wordplay_core::Session;

mod cli;

use crate::cli::{CheckArgs, CheckFormatArg, Cli, Command, LogFormatArg, LogLevelArg, PlayArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = GameSetup::load(&cli.sources.overrides()).and_then(|setup| match &cli.command {
        Command::Play(args) => run_play(&setup, args),
        Command::Check(args) => run_check(&setup, args),
    });
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_play(setup: &GameSetup, args: &PlayArgs) -> Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let root = setup.pick_root(args.root.as_deref(), &mut rng)?;
    let mut session = Session::with_options(&setup.dictionary, root, &setup.options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(
        &mut session,
        || setup.next_root(&mut rng),
        stdin.lock(),
        &mut stdout,
    )
    .context("interactive session")?;
    Ok(())
}

fn run_check(setup: &GameSetup, args: &CheckArgs) -> Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let root = setup.pick_root(args.root.as_deref(), &mut rng)?;
    let mut session = Session::with_options(&setup.dictionary, root, &setup.options);
    let report = check_words(&mut session, args.words.as_slice());
    match args.format {
        CheckFormatArg::Plain => print!("{}", render_plain(&report)),
        CheckFormatArg::Json => println!("{}", render_json(&report).context("serialize report")?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
