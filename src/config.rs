//! Configuration management and validation.
//!
//! Provides the parameters of a single analysis run: where the report goes,
//! which carrier and threshold the delay question examines, and how
//! malformed flight dates are treated.

use crate::constants::{
    DEFAULT_DELAY_CARRIER, DEFAULT_DELAY_THRESHOLD_MINUTES, DEFAULT_REPORT_FILE_NAME,
    DEFAULT_WEATHER_CANCELLATION_CODE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a date token that looks like a date but does not parse is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatePolicy {
    /// Abort the load with a date parsing error
    #[default]
    Strict,
    /// Substitute the sentinel date and keep the row
    Lenient,
}

/// Configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// File name of the report inside the output directory
    pub report_file_name: String,

    /// Carrier examined by the long-delay question (case-insensitive)
    pub delay_carrier: String,

    /// Delay in minutes at or above which a flight counts as delayed
    pub delay_threshold_minutes: i32,

    /// Cancellation code that marks weather-related cancellations (case-insensitive)
    pub weather_cancellation_code: String,

    /// Treatment of malformed flight dates
    pub date_policy: DatePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            delay_carrier: DEFAULT_DELAY_CARRIER.to_string(),
            delay_threshold_minutes: DEFAULT_DELAY_THRESHOLD_MINUTES,
            weather_cancellation_code: DEFAULT_WEATHER_CANCELLATION_CODE.to_string(),
            date_policy: DatePolicy::Strict,
        }
    }
}

impl AnalysisConfig {
    /// Set the report file name
    pub fn with_report_file_name(mut self, name: impl Into<String>) -> Self {
        self.report_file_name = name.into();
        self
    }

    /// Set the carrier examined by the long-delay question
    pub fn with_delay_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.delay_carrier = carrier.into();
        self
    }

    /// Set the long-delay threshold in minutes
    pub fn with_delay_threshold(mut self, minutes: i32) -> Self {
        self.delay_threshold_minutes = minutes;
        self
    }

    /// Set the weather cancellation code
    pub fn with_weather_cancellation_code(mut self, code: impl Into<String>) -> Self {
        self.weather_cancellation_code = code.into();
        self
    }

    /// Substitute the sentinel date for malformed dates instead of failing
    pub fn with_lenient_dates(mut self) -> Self {
        self.date_policy = DatePolicy::Lenient;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let name = self.report_file_name.trim();
        if name.is_empty() {
            return Err(Error::configuration("Report file name cannot be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(Error::configuration(format!(
                "Report file name '{}' must not contain a path separator",
                self.report_file_name
            )));
        }

        if self.delay_carrier.trim().is_empty() {
            return Err(Error::configuration("Delay carrier cannot be empty"));
        }

        if self.delay_threshold_minutes < 0 {
            return Err(Error::configuration(format!(
                "Delay threshold must not be negative, got {}",
                self.delay_threshold_minutes
            )));
        }

        if self.weather_cancellation_code.trim().is_empty() {
            return Err(Error::configuration(
                "Weather cancellation code cannot be empty",
            ));
        }

        Ok(())
    }
}
