//! Loading records from files and from the prompt, then querying them.

use crate::common::assert_index_well_formed;
use rollcall::load::{read_records_from_file, read_records_interactive};
use rollcall::{LoadError, Session, Strategy};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_file_roster_end_to_end() {
    let file = data_file(
        "Alice Smith alice@x.com\n\nBob Jones bob@x.com\n   \nAlice Jones alice@y.com\n",
    );
    let records = read_records_from_file(file.path()).unwrap();
    assert_eq!(records.len(), 3);

    let session = Session::new(records);
    assert_index_well_formed(session.index(), session.records());
    assert_eq!(session.find(&["alice", "jones"], Strategy::All), vec![2]);
    assert_eq!(session.find(&["bob"], Strategy::None), vec![0, 2]);
}

#[test]
fn test_file_without_trailing_newline() {
    let file = data_file("Carol Danvers\r\nDave Lister");
    let records = read_records_from_file(file.path()).unwrap();
    assert_eq!(records, vec!["Carol Danvers", "Dave Lister"]);
}

#[test]
fn test_empty_file() {
    let file = data_file("");
    let records = read_records_from_file(file.path()).unwrap();
    assert!(records.is_empty());
    assert!(Session::new(records).is_empty());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = read_records_from_file(&path).unwrap_err();
    match &err {
        LoadError::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_interactive_roster_end_to_end() {
    let mut input = Cursor::new(b"3\nAlice Smith\n  Bob Jones  \nCarol Smith\n".to_vec());
    let mut output = Vec::new();
    let records = read_records_interactive(&mut input, &mut output).unwrap();

    let session = Session::new(records);
    assert_eq!(session.record(1), Some("Bob Jones"));
    assert_eq!(session.find(&["smith"], Strategy::Any), vec![0, 2]);
}
