//! Answer report sink
//!
//! Collects the nine answers by question number and writes them as
//! `answers.txt`: one answer per line, in question order, each line
//! terminated by a newline.
//!
//! The file is written to a temporary file in the destination directory and
//! then renamed into place, so an interrupted write never leaves a partial
//! report and an existing report is replaced as a whole.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flight_stats::app::services::report_writer::AnswerReport;
//!
//! # fn example() -> flight_stats::Result<()> {
//! let mut report = AnswerReport::new();
//! for question in 1..=9 {
//!     report.add_answer(question, format!("answer {}", question))?;
//! }
//! let path = report.write_to_dir(std::path::Path::new("."), "answers.txt")?;
//! println!("Report written to {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::AnswerReport;
