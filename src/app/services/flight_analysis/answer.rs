//! Answer values produced by the analysis questions

use crate::constants::messages;
use std::fmt;

/// Fixed message emitted when a question cannot be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// The cancelled collection is empty
    NoCancelledData,
    /// The completed collection is empty
    NoCompletedData,
    /// No flight carries the fields the question needs
    IncompleteData,
    /// No cancelled flight has the weather cancellation code
    NoWeatherCancellations,
}

impl Fallback {
    pub fn message(self) -> &'static str {
        match self {
            Fallback::NoCancelledData => messages::NO_CANCELLED_DATA,
            Fallback::NoCompletedData => messages::NO_COMPLETED_DATA,
            Fallback::IncompleteData => messages::INCOMPLETE_DATA,
            Fallback::NoWeatherCancellations => messages::NO_WEATHER_CANCELLATIONS,
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one analysis question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Computed answer text
    Value(String),
    /// The question could not be answered
    Fallback(Fallback),
}

impl Answer {
    pub fn value(text: impl Into<String>) -> Self {
        Answer::Value(text.into())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Answer::Fallback(_))
    }
}

impl From<Fallback> for Answer {
    fn from(fallback: Fallback) -> Self {
        Answer::Fallback(fallback)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(text) => f.write_str(text),
            Answer::Fallback(fallback) => fallback.fmt(f),
        }
    }
}
