//! Interactive menu transcripts.

use crate::common::sample_roster;
use rollcall::cli::display::Painter;
use rollcall::cli::menu::run_menu;
use rollcall::Session;
use std::io::Cursor;

const MENU: &str = "=== Menu ===\n1. Find a person\n2. Print all people\n0. Exit\n";
const STRATEGY_PROMPT: &str = "Select a matching strategy: ALL, ANY, NONE\n";
const QUERY_PROMPT: &str = "Enter a name or email to search all suitable people.\n";

/// Run the menu over `input` and return everything written to stdout.
fn transcript(input: &str) -> String {
    let session = Session::new(sample_roster());
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    run_menu(&session, &mut input, &mut output, Painter::plain()).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_exit_immediately() {
    assert_eq!(transcript("0\n"), format!("{}Bye!\n", MENU));
}

#[test]
fn test_find_all() {
    let out = transcript("1\nall\nAlice Jones\n0\n");
    let expected = format!(
        "{MENU}{STRATEGY_PROMPT}{QUERY_PROMPT}1 persons found:\nAlice Jones alice@y.com\n{MENU}Bye!\n"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_find_any() {
    let out = transcript("1\nANY\nalice jones\n0\n");
    assert!(out.contains(
        "3 persons found:\nAlice Smith alice@x.com\nBob Jones bob@x.com\nAlice Jones alice@y.com\n"
    ));
}

#[test]
fn test_find_none() {
    let out = transcript("1\nNone\nbob\n0\n");
    assert!(out.contains("2 persons found:\nAlice Smith alice@x.com\nAlice Jones alice@y.com\n"));
}

#[test]
fn test_no_matches() {
    let out = transcript("1\nALL\nzzz\n0\n");
    assert!(out.contains(&format!("{QUERY_PROMPT}No matching people found.\n")));
}

#[test]
fn test_empty_query_is_rejected_before_search() {
    // NONE over an empty query would match everyone; the menu refuses it
    let out = transcript("1\nNONE\n   \n0\n");
    assert!(out.contains(&format!("{QUERY_PROMPT}No matching people found.\n")));
    assert!(!out.contains("persons found"));
}

#[test]
fn test_unknown_strategy() {
    let out = transcript("1\nMOST\n0\n");
    let expected = format!("{MENU}{STRATEGY_PROMPT}Unknown strategy.\n{MENU}Bye!\n");
    assert_eq!(out, expected);
}

#[test]
fn test_incorrect_option() {
    let out = transcript("7\nabc\n0\n");
    let expected = format!(
        "{MENU}Incorrect option! Try again.\n{MENU}Incorrect option! Try again.\n{MENU}Bye!\n"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_print_all() {
    let out = transcript("2\n0\n");
    let expected = format!(
        "{MENU}=== List of people ===\nAlice Smith alice@x.com\nBob Jones bob@x.com\nAlice Jones alice@y.com\n{MENU}Bye!\n"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_end_of_input_stops_quietly() {
    assert_eq!(transcript(""), MENU);
    let out = transcript("1\nall\n");
    assert_eq!(out, format!("{MENU}{STRATEGY_PROMPT}{QUERY_PROMPT}"));
}

#[test]
fn test_several_searches_in_one_session() {
    let out = transcript("1\nall\nalice\n1\nany\nbob\n0\n");
    assert!(out.contains("2 persons found:"));
    assert!(out.contains("1 persons found:\nBob Jones bob@x.com\n"));
    assert_eq!(out.matches("=== Menu ===").count(), 3);
}
