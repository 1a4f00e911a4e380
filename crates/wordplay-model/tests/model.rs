//! Tests for wordplay-model types.

use wordplay_model::{Candidate, History, Rejection, RootWord, ValidationOutcome};

#[test]
fn history_serializes_as_plain_list() {
    let mut history = History::new();
    history.record(Candidate::new("silk"));
    history.record(Candidate::new("worm"));

    let json = serde_json::to_string(&history).expect("serialize history");
    assert_eq!(json, r#"["worm","silk"]"#);

    let round: History = serde_json::from_str(&json).expect("deserialize history");
    assert_eq!(round, history);
}

#[test]
fn outcome_json_shape() {
    let accepted = serde_json::to_value(ValidationOutcome::Accepted).expect("serialize");
    assert_eq!(accepted, serde_json::json!({ "status": "accepted" }));

    let rejected =
        serde_json::to_value(ValidationOutcome::Rejected(Rejection::NotDerived)).expect("serialize");
    assert_eq!(
        rejected,
        serde_json::json!({ "status": "rejected", "reason": "not_derived" })
    );
}

#[test]
fn rejection_codes_are_distinct() {
    let codes = [
        Rejection::Empty.code(),
        Rejection::AlreadyUsed.code(),
        Rejection::NotDerived.code(),
        Rejection::NotAWord.code(),
    ];
    for (idx, code) in codes.iter().enumerate() {
        assert!(!codes[idx + 1..].contains(code), "duplicate code {code}");
    }
}

#[test]
fn root_word_keeps_unicode_letters() {
    let root = RootWord::new("Über").expect("alphabetic root");
    assert_eq!(root.as_str(), "über");
    assert_eq!(root.letter_count(), 4);
}
