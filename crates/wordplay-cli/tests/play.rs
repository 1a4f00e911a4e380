//! Integration tests for the CLI driving layer.

use std::io::Cursor;

use wordplay_cli::play::{check_words, play};
use wordplay_cli::report::{history_table, render_json, render_plain};
use wordplay_core::Session;
use wordplay_model::{Rejection, RootWord, ValidationOutcome};
use wordplay_validate::WordListDictionary;

fn root(word: &str) -> RootWord {
    RootWord::new(word).expect("valid root")
}

fn dictionary() -> WordListDictionary {
    WordListDictionary::new().with_words("en", ["silk", "worm", "milk", "listen", "tinsel"])
}

#[test]
fn check_report_renders_one_line_per_word() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("silkworm"));
    let report = check_words(&mut session, &["Silk", "silk", "zebra", "  ", "mils", "worm"]);

    assert_eq!(report.accepted_count(), 2);
    assert_eq!(report.history, ["worm", "silk"]);
    insta::assert_snapshot!(render_plain(&report), @r"
    root: silkworm (en)
    silk: accepted (4 letters)
    silk: Word already used. Be more original!
    zebra: Word not possible. You can't spell that from 'silkworm'!
    (blank): ignored
    mils: Word not recognized. Please, insert a real word!
    worm: accepted (4 letters)
    accepted 2 of 6
    ");
}

#[test]
fn check_report_json_carries_reasons() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("listen"));
    let report = check_words(&mut session, &["tinsel", "listen"]);

    let json: serde_json::Value =
        serde_json::from_str(&render_json(&report).expect("serialize")).expect("parse");
    assert_eq!(json["root"], "listen");
    assert_eq!(json["entries"][0]["outcome"]["status"], "accepted");
    assert!(json["entries"][0].get("title").is_none());
    assert_eq!(json["entries"][1]["outcome"]["reason"], "not_derived");
    assert_eq!(json["entries"][1]["title"], "Word not possible");
    assert_eq!(json["history"], serde_json::json!(["tinsel"]));
}

#[test]
fn check_entries_keep_raw_input() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("silkworm"));
    let report = check_words(&mut session, &[" MILK "]);

    let entry = &report.entries[0];
    assert_eq!(entry.input, " MILK ");
    assert_eq!(entry.word, "milk");
    assert_eq!(entry.outcome, ValidationOutcome::Accepted);
}

#[test]
fn interactive_loop_reports_and_restarts() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("silkworm"));
    let input = Cursor::new("silk\nsilk\n\nzebra\n:new\ntinsel\n:quit\nworm\n");
    let mut output = Vec::new();

    let found = play(&mut session, || root("listen"), input, &mut output).expect("play");
    let output = String::from_utf8(output).expect("utf8");

    assert_eq!(found, 1);
    assert_eq!(session.history().words(), ["tinsel"]);
    assert_eq!(
        output,
        "Root word: silkworm\n\
         Enter your word (:new, :words, :quit)\n\
         + silk (4 letters)\n\
         Word already used: Be more original!\n\
         Word not possible: You can't spell that from 'silkworm'!\n\
         Root word: listen\n\
         Enter your word (:new, :words, :quit)\n\
         + tinsel (6 letters)\n\
         Words found: 1\n"
    );
}

#[test]
fn interactive_loop_stops_at_end_of_input() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("silkworm"));
    let mut output = Vec::new();

    let found = play(&mut session, || root("listen"), Cursor::new("worm"), &mut output)
        .expect("play");
    assert_eq!(found, 1);
    assert_eq!(
        session.submit("worm"),
        ValidationOutcome::Rejected(Rejection::AlreadyUsed)
    );
}

#[test]
fn history_table_lists_words_with_letter_counts() {
    let dictionary = dictionary();
    let mut session = Session::new(&dictionary, root("silkworm"));
    session.submit("silk");
    session.submit("worm");

    let rendered = history_table(session.history()).to_string();
    let worm_line = rendered.find("worm").expect("worm listed");
    let silk_line = rendered.find("silk").expect("silk listed");
    assert!(worm_line < silk_line, "most recent word first:\n{rendered}");
    assert!(rendered.contains("Letters"));
}
