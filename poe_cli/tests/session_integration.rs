//! Integration tests for poe_cli sessions.
//!
//! Drives whole sessions through scripted input, the way the binary wires
//! configuration, word lists and the session loop together.

use poe_cli::{
    config::{CliConfig, Overrides},
    session::{RoundOutcome, Session, SessionSummary},
};
use process_of_elimination::{RoundSettings, WordList};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Cursor;

fn run_script(config: &CliConfig, words: &WordList, script: &str) -> (SessionSummary, String) {
    let mut custom = config.word.clone();
    let mut rng = StdRng::seed_from_u64(3);
    let next_problem = move || {
        custom
            .take()
            .or_else(|| words.choose(&mut rng).map(str::to_string))
    };

    let mut output = Vec::new();
    let summary = {
        let mut session = Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
            RoundSettings::new(config.max_incorrect),
        );
        session.run(next_problem, config.once).unwrap()
    };
    (summary, String::from_utf8(output).unwrap())
}

fn config(overrides: Overrides) -> CliConfig {
    CliConfig::from_lookup(overrides, |_| None).unwrap()
}

#[test]
fn test_custom_word_then_list_word() {
    let config = config(Overrides {
        word: Some("Go".to_string()),
        max_incorrect: Some(2),
        ..Overrides::default()
    });
    let words = WordList::parse("zz\n").unwrap();

    // Win "Go", play again, lose "zz"
    let (summary, out) = run_script(&config, &words, "g\no\nyes\na\nb\nn\n");

    assert_eq!(summary.won, 1);
    assert_eq!(summary.lost, 1);
    assert!(out.contains("G _"));
    assert!(out.contains("Solved it! The problem was: Go"));
    assert!(out.contains("Out of guesses. The problem was: zz"));
}

#[test]
fn test_once_stops_after_first_round() {
    let config = config(Overrides {
        word: Some("hi".to_string()),
        once: true,
        ..Overrides::default()
    });
    let (summary, out) = run_script(&config, &WordList::default(), "h\ni\n");

    assert_eq!(summary.won, 1);
    assert!(!out.contains("Play again?"));
}

#[test]
fn test_quit_abandons_session() {
    let config = config(Overrides::default());
    let (summary, out) = run_script(&config, &WordList::default(), "quit\n");

    assert_eq!(summary.abandoned, 1);
    assert!(out.contains("Thanks for playing! Won 0, lost 0."));
}

#[test]
fn test_phrase_with_spaces_is_pre_revealed() {
    let mut output = Vec::new();
    let outcome = {
        let mut session = Session::new(
            Cursor::new(b"a\nb\n".to_vec()),
            &mut output,
            RoundSettings::default(),
        );
        session.play_round("ab ba").unwrap()
    };

    assert_eq!(outcome, RoundOutcome::Won);
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("_ _   _ _"));
}
