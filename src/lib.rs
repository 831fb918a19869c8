//! Flight Statistics Library
//!
//! A Rust library for answering a fixed set of statistical questions about a
//! comma-separated flight history file and recording the answers as a
//! nine-line text report.
//!
//! This library provides tools for:
//! - Reading flight rows with field validation and sentinel substitution
//! - Partitioning flights into completed and cancelled collections
//! - Answering the nine cancellation, airport, aircraft and delay questions
//! - Writing the `answers.txt` report atomically
//!
//! ```rust,no_run
//! # fn example() -> flight_stats::Result<()> {
//! flight_stats::analyze("data/flights.csv", "data")?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use tracing::info;

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod flight_analysis;
        pub mod flight_csv_parser;
        pub mod report_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Flight, FlightStatus};
pub use app::services::flight_analysis::{Answer, Fallback, FlightAnalyzer};
pub use app::services::flight_csv_parser::{FlightCsvParser, FlightDataset, LoadStats};
pub use app::services::report_writer::AnswerReport;
pub use config::{AnalysisConfig, DatePolicy};

/// Result type alias for flight statistics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flight statistics operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A data row could not be turned into a flight record
    #[error("Invalid data at line {line}")]
    RowParsing {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The report is missing answers
    #[error("Report is incomplete: no answer for questions {missing:?}")]
    ReportIncomplete { missing: Vec<usize> },

    /// Question number outside the report
    #[error("Invalid question number {index}: expected 1 to 9")]
    InvalidQuestion { index: usize },

    /// Report file could not be written
    #[error("Failed to write report '{path}'")]
    ReportWriting {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Attach a 1-based line number to a row-level error
    pub fn row_parsing(line: usize, source: Error) -> Self {
        Self::RowParsing {
            line,
            source: Box::new(source),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn report_incomplete(missing: Vec<usize>) -> Self {
        Self::ReportIncomplete { missing }
    }

    pub fn invalid_question(index: usize) -> Self {
        Self::InvalidQuestion { index }
    }

    /// Create a report writing error
    pub fn report_writing(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReportWriting {
            path: path.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

/// What one analysis run produced
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Path of the written report
    pub report_path: PathBuf,
    /// How the input rows were classified
    pub load_stats: LoadStats,
    /// The nine answers, in report order
    pub answers: Vec<Answer>,
}

impl AnalysisOutcome {
    /// Number of questions answered with a fallback message
    pub fn fallback_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_fallback()).count()
    }
}

/// Analyse a flight file and write `answers.txt` into `output_dir`
///
/// An unreadable input file still produces a report, with every question
/// answered by its "no information" message.
pub fn analyze(input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<()> {
    analyze_with_config(input.as_ref(), output_dir.as_ref(), &AnalysisConfig::default())?;
    Ok(())
}

/// Analyse a flight file with explicit settings
pub fn analyze_with_config(
    input: &Path,
    output_dir: &Path,
    config: &AnalysisConfig,
) -> Result<AnalysisOutcome> {
    config.validate()?;

    let loaded = FlightCsvParser::new(config.date_policy).load(input)?;
    let answers = FlightAnalyzer::new(config.clone()).answer_all(&loaded.dataset);

    let report = AnswerReport::from_answers(&answers)?;
    let report_path = report.write_to_dir(output_dir, &config.report_file_name)?;

    let outcome = AnalysisOutcome {
        report_path,
        load_stats: loaded.stats,
        answers,
    };
    info!(
        "Analysis finished: {} of {} questions answered",
        outcome.answers.len() - outcome.fallback_count(),
        outcome.answers.len()
    );
    Ok(outcome)
}
