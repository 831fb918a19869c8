//! Command-line argument definitions for the flight statistics tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::AnalysisConfig;
use crate::constants::{
    DEFAULT_DELAY_CARRIER, DEFAULT_DELAY_THRESHOLD_MINUTES, DEFAULT_REPORT_FILE_NAME,
    DEFAULT_WEATHER_CANCELLATION_CODE,
};
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the flight statistics tool
///
/// Reads a flight history file, answers nine statistical questions about it
/// and records the answers in a text report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-stats",
    version,
    about = "Answer statistical questions about a flight history CSV file",
    long_about = "Reads a comma-separated flight history file, answers nine questions about \
                  cancellations, airports, aircraft and delays, and writes the answers one per \
                  line to a report file next to the input (or into --output-dir)."
)]
pub struct Args {
    /// Flight history file to analyse
    ///
    /// The first line is a header and is skipped. An unreadable file still
    /// produces a report made of "no information" answers.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the report
    ///
    /// Defaults to the directory containing the input file.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory for the report (defaults to the input file's directory)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long = "report-name",
        value_name = "NAME",
        default_value = DEFAULT_REPORT_FILE_NAME,
        help = "File name of the report"
    )]
    pub report_name: String,

    #[arg(
        long = "carrier",
        value_name = "CODE",
        default_value = DEFAULT_DELAY_CARRIER,
        help = "Carrier examined by the long-delay question"
    )]
    pub carrier: String,

    #[arg(
        long = "delay-threshold",
        value_name = "MIN",
        default_value_t = DEFAULT_DELAY_THRESHOLD_MINUTES,
        allow_negative_numbers = true,
        help = "Delay in minutes counted as a long delay"
    )]
    pub delay_threshold: i32,

    #[arg(
        long = "weather-code",
        value_name = "CODE",
        default_value = DEFAULT_WEATHER_CANCELLATION_CODE,
        help = "Cancellation code of weather-related cancellations"
    )]
    pub weather_code: String,

    /// Keep rows whose flight date cannot be parsed
    ///
    /// By default a malformed flight date aborts the analysis. With this flag
    /// the row is kept with a placeholder date.
    #[arg(
        long = "lenient-dates",
        help = "Substitute a placeholder for malformed flight dates instead of failing"
    )]
    pub lenient_dates: bool,

    #[arg(long = "no-progress", help = "Do not show a progress spinner")]
    pub no_progress: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,

    /// Suppress output (quiet mode)
    ///
    /// Only warnings and errors are logged and no summary is printed.
    #[arg(short = 'q', long = "quiet", help = "Suppress output except warnings and errors")]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet cannot be used together",
            ));
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }

        self.to_config().validate()
    }

    /// Directory the report is written to
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => match self.input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }

    /// Analysis settings selected on the command line
    pub fn to_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::default()
            .with_report_file_name(self.report_name.clone())
            .with_delay_carrier(self.carrier.clone())
            .with_delay_threshold(self.delay_threshold)
            .with_weather_cancellation_code(self.weather_code.clone());

        if self.lenient_dates {
            config.with_lenient_dates()
        } else {
            config
        }
    }

    /// Determine the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Check if we should show the progress spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatePolicy;
    use tempfile::{NamedTempFile, TempDir};

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["flight-stats"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["data/flights.csv"]);

        assert_eq!(args.report_name, "answers.txt");
        assert_eq!(args.carrier, "AA");
        assert_eq!(args.delay_threshold, 60);
        assert_eq!(args.weather_code, "B");
        assert!(!args.lenient_dates);
        assert!(args.show_progress());
        assert_eq!(args.get_log_level(), "info");
        assert_eq!(args.to_config(), AnalysisConfig::default());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["flight-stats"]).is_err());
    }

    #[test]
    fn test_output_dir_defaults_to_input_directory() {
        assert_eq!(
            parse(&["data/2017/flights.csv"]).output_dir(),
            PathBuf::from("data/2017")
        );
        assert_eq!(parse(&["flights.csv"]).output_dir(), PathBuf::from("."));
        assert_eq!(
            parse(&["data/flights.csv", "-o", "out"]).output_dir(),
            PathBuf::from("out")
        );
    }

    #[test]
    fn test_to_config() {
        let args = parse(&[
            "flights.csv",
            "--report-name",
            "report.txt",
            "--carrier",
            "UA",
            "--delay-threshold",
            "45",
            "--weather-code",
            "C",
            "--lenient-dates",
        ]);
        let config = args.to_config();

        assert_eq!(config.report_file_name, "report.txt");
        assert_eq!(config.delay_carrier, "UA");
        assert_eq!(config.delay_threshold_minutes, 45);
        assert_eq!(config.weather_cancellation_code, "C");
        assert_eq!(config.date_policy, DatePolicy::Lenient);
    }

    #[test]
    fn test_verbosity_flags() {
        let verbose = parse(&["flights.csv", "-v"]);
        assert_eq!(verbose.get_log_level(), "debug");

        let quiet = parse(&["flights.csv", "--quiet"]);
        assert_eq!(quiet.get_log_level(), "warn");
        assert!(!quiet.show_progress());

        let no_progress = parse(&["flights.csv", "--no-progress"]);
        assert!(!no_progress.show_progress());
    }

    #[test]
    fn test_validate_rejects_conflicting_flags() {
        let args = parse(&["flights.csv", "-v", "-q"]);
        assert!(matches!(
            args.validate().unwrap_err(),
            Error::Configuration { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let negative = parse(&["flights.csv", "--delay-threshold", "-5"]);
        assert!(negative.validate().is_err());

        let nested_name = parse(&["flights.csv", "--report-name", "sub/answers.txt"]);
        assert!(nested_name.validate().is_err());
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        assert!(parse(&["flights.csv", "-o", dir]).validate().is_ok());

        // Not created yet is fine, the writer creates it
        let missing = temp_dir.path().join("new");
        assert!(
            parse(&["flights.csv", "-o", missing.to_str().unwrap()])
                .validate()
                .is_ok()
        );

        let file = NamedTempFile::new().unwrap();
        let file_path = file.path().to_str().unwrap();
        assert!(parse(&["flights.csv", "-o", file_path]).validate().is_err());
    }
}
