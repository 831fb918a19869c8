//! Test utilities for the report writer

use super::AnswerReport;

mod writer_tests;

/// A report with every question answered by `"answer <n>"`
pub fn complete_report() -> AnswerReport {
    AnswerReport::from_answers((1..=9).map(|n| format!("answer {}", n))).unwrap()
}

/// Expected file content of [`complete_report`]
pub fn complete_report_text() -> String {
    (1..=9).map(|n| format!("answer {}\n", n)).collect()
}
