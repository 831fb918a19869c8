//! Load statistics and result structures for flight file loading
//!
//! This module provides the two partitioned flight collections and the
//! counters describing how the rows of a file were classified.

use crate::app::models::{Flight, FlightStatus};

/// Flights partitioned by classification, discarded rows excluded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightDataset {
    /// Flights that flew (or were diverted) with usable times
    pub completed: Vec<Flight>,

    /// Flights whose cancellation flag is set
    pub cancelled: Vec<Flight>,
}

impl FlightDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flight to the collection matching its status
    ///
    /// Returns `false` when the flight was discarded.
    pub fn push(&mut self, flight: Flight, status: FlightStatus) -> bool {
        match status {
            FlightStatus::Completed => self.completed.push(flight),
            FlightStatus::Cancelled => self.cancelled.push(flight),
            FlightStatus::Discarded => return false,
        }
        true
    }

    /// Whether both collections are empty
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.cancelled.is_empty()
    }

    /// Total number of retained flights
    pub fn len(&self) -> usize {
        self.completed.len() + self.cancelled.len()
    }
}

/// Row classification counters for one load
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Data rows read after the header
    pub total_records: usize,

    /// Rows classified as completed flights
    pub completed: usize,

    /// Rows classified as cancelled flights
    pub cancelled: usize,

    /// Rows dropped as unusable
    pub discarded: usize,

    /// Set when the file could not be read and an empty dataset was substituted
    pub read_failed: bool,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified row
    pub fn record(&mut self, status: FlightStatus) {
        self.total_records += 1;
        match status {
            FlightStatus::Completed => self.completed += 1,
            FlightStatus::Cancelled => self.cancelled += 1,
            FlightStatus::Discarded => self.discarded += 1,
        }
    }

    /// Share of rows that were retained, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            ((self.completed + self.cancelled) as f64 / self.total_records as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows: {} completed, {} cancelled, {} discarded ({:.1}% retained)",
            self.total_records,
            self.completed,
            self.cancelled,
            self.discarded,
            self.retention_rate()
        )
    }
}

/// Loaded dataset together with its statistics
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub dataset: FlightDataset,
    pub stats: LoadStats,
}

impl LoadResult {
    /// Empty result used when the input could not be read
    pub fn read_failure() -> Self {
        Self {
            dataset: FlightDataset::new(),
            stats: LoadStats {
                read_failed: true,
                ..LoadStats::default()
            },
        }
    }
}
