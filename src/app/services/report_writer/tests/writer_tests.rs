//! Tests for report assembly and writing

use super::*;
use crate::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_in_question_order() {
    let mut report = AnswerReport::new();
    for index in (1..=9).rev() {
        report.add_answer(index, format!("answer {}", index)).unwrap();
    }

    assert!(report.is_complete());
    assert_eq!(report.render().unwrap(), complete_report_text());
}

#[test]
fn test_add_answer_rejects_out_of_range_index() {
    let mut report = AnswerReport::new();

    for index in [0, 10, 42] {
        let err = report.add_answer(index, "x").unwrap_err();
        assert!(matches!(err, Error::InvalidQuestion { index: i } if i == index));
    }
    assert!(report.is_empty());
}

#[test]
fn test_add_answer_replaces_and_folds_line_breaks() {
    let mut report = complete_report();
    report.add_answer(4, "first").unwrap();
    report.add_answer(4, "two\r\nlines").unwrap();

    assert_eq!(report.answer(4), Some("two  lines"));
    assert_eq!(report.len(), 9);
}

#[test]
fn test_incomplete_report_is_not_written() {
    let temp_dir = TempDir::new().unwrap();
    let mut report = AnswerReport::new();
    report.add_answer(1, "only one").unwrap();
    report.add_answer(5, "and five").unwrap();

    let err = report.write_to_dir(temp_dir.path(), "answers.txt").unwrap_err();
    match err {
        Error::ReportIncomplete { missing } => assert_eq!(missing, vec![2, 3, 4, 6, 7, 8, 9]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!temp_dir.path().join("answers.txt").exists());
}

#[test]
fn test_write_to_dir() {
    let temp_dir = TempDir::new().unwrap();

    let path = complete_report()
        .write_to_dir(temp_dir.path(), "answers.txt")
        .unwrap();

    assert_eq!(path, temp_dir.path().join("answers.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), complete_report_text());
    // Only the report remains, no staging files
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_overwrites_existing_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.txt");
    fs::write(&path, "stale\ncontent\nfrom\nan\nearlier\nrun\nwith\nmore\nlines\nthan\nnine\n").unwrap();

    complete_report()
        .write_to_dir(temp_dir.path(), "answers.txt")
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), complete_report_text());
}

#[test]
fn test_write_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("reports").join("2017");

    let path = complete_report().write_to_dir(&nested, "out.txt").unwrap();

    assert!(path.exists());
    assert_eq!(path, nested.join("out.txt"));
}

#[test]
fn test_write_into_a_file_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let err = complete_report()
        .write_to_dir(&blocker, "answers.txt")
        .unwrap_err();

    assert!(matches!(err, Error::ReportWriting { .. }));
}
