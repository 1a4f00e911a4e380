//! Driving a session from text input.

use std::io::{self, BufRead, Write};

use tracing::{debug, info_span};

use wordplay_core::Session;
use wordplay_model::{Candidate, RootWord, ValidationOutcome};
use wordplay_validate::SpellChecker;

use crate::report::{CheckEntry, CheckReport, history_table};

const NEW_ROOT_COMMAND: &str = ":new";
const WORDS_COMMAND: &str = ":words";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

/// Submit `words` in order to one session and collect the results.
pub fn check_words<O, S>(session: &mut Session<'_, O>, words: &[S]) -> CheckReport
where
    O: SpellChecker + ?Sized,
    S: AsRef<str>,
{
    let span = info_span!("check", root = %session.root(), words = words.len());
    let _guard = span.enter();
    let entries = words
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let word = Candidate::new(raw);
            let outcome = session.submit(raw);
            CheckEntry::new(raw, word.as_str(), outcome, session.root())
        })
        .collect();
    CheckReport {
        root: session.root().clone(),
        language: session.language().to_string(),
        entries,
        history: session.history().words().to_vec(),
    }
}

/// Interactive loop: one candidate per line until `:quit` or end of input.
///
/// `next_root` supplies the root for `:new`.
pub fn play<O, R, W, F>(
    session: &mut Session<'_, O>,
    mut next_root: F,
    input: R,
    output: &mut W,
) -> io::Result<usize>
where
    O: SpellChecker + ?Sized,
    R: BufRead,
    W: Write,
    F: FnMut() -> RootWord,
{
    print_banner(session, output)?;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if QUIT_COMMANDS.contains(&command) {
            break;
        }
        match command {
            NEW_ROOT_COMMAND => {
                session.start(next_root());
                print_banner(session, output)?;
            }
            WORDS_COMMAND => {
                writeln!(output, "{}", history_table(session.history()))?;
            }
            _ => submit_line(session, &line, output)?,
        }
        output.flush()?;
    }
    let found = session.history().len();
    writeln!(output, "Words found: {found}")?;
    Ok(found)
}

fn submit_line<O, W>(session: &mut Session<'_, O>, line: &str, output: &mut W) -> io::Result<()>
where
    O: SpellChecker + ?Sized,
    W: Write,
{
    match session.submit(line) {
        ValidationOutcome::Accepted => {
            let word = session.history().words().first().map_or("", String::as_str);
            writeln!(output, "+ {word} ({} letters)", word.chars().count())
        }
        ValidationOutcome::Rejected(reason) => {
            match (reason.title(), reason.message(session.root())) {
                (Some(title), Some(message)) => writeln!(output, "{title}: {message}"),
                _ => {
                    debug!("ignoring blank input");
                    Ok(())
                }
            }
        }
    }
}

fn print_banner<O, W>(session: &Session<'_, O>, output: &mut W) -> io::Result<()>
where
    O: SpellChecker + ?Sized,
    W: Write,
{
    writeln!(output, "Root word: {}", session.root())?;
    writeln!(output, "Enter your word ({NEW_ROOT_COMMAND}, {WORDS_COMMAND}, :quit)")
}
