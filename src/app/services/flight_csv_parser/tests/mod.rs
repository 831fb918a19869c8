//! Test utilities for flight parser testing
//!
//! This module provides a row builder and file helpers shared by the parser
//! tests and by the analysis tests.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::Flight;
use crate::config::DatePolicy;
use crate::constants::columns;

use super::field_parsers::split_row;
use super::record_parser::parse_flight_record;


/// Header line of the flight history export
pub const HEADER: &str = "DAY_OF_MONTH,DAY_OF_WEEK,FL_DATE,UNIQUE_CARRIER,TAIL_NUM,ORIGIN_AIRPORT_ID,ORIGIN,ORIGIN_STATE_NM,DEST_AIRPORT_ID,DEST,DEST_STATE_NM,DEP_TIME,DEP_DELAY,WHEELS_OFF,WHEELS_ON,ARR_TIME,ARR_DELAY,CANCELLED,CANCELLATION_CODE,DIVERTED,AIR_TIME,DISTANCE";

/// Builder for one data row of the flight history export
#[derive(Debug, Clone)]
pub struct FlightRow {
    fields: Vec<String>,
}

impl FlightRow {
    /// An on-time American Airlines flight from Atlanta to Los Angeles
    pub fn completed() -> Self {
        let fields = [
            "15", "7", "01-15-17", "AA", "N001", "10397", "ATL", "Georgia", "12892", "LAX",
            "California", "900", "5", "915", "1100", "1130", "-3", "0", "", "0", "195", "1946",
        ];
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// A weather-cancelled flight with no times or delays
    pub fn cancelled() -> Self {
        Self::completed()
            .set(columns::DEP_TIME, "")
            .set(columns::DEP_DELAY, "")
            .set(columns::WHEELS_OFF, "")
            .set(columns::WHEELS_ON, "")
            .set(columns::ARR_TIME, "")
            .set(columns::ARR_DELAY, "")
            .set(columns::CANCELLED, "1")
            .set(columns::CANCELLATION_CODE, "B")
            .set(columns::AIR_TIME, "")
    }

    /// Replace the value of one column
    pub fn set(mut self, column: usize, value: &str) -> Self {
        self.fields[column] = value.to_string();
        self
    }

    /// Keep only the first `count` columns
    pub fn truncate(mut self, count: usize) -> Self {
        self.fields.truncate(count);
        self
    }

    pub fn carrier(self, carrier: &str) -> Self {
        self.set(columns::UNIQUE_CARRIER, carrier)
    }

    pub fn tail(self, tail: &str) -> Self {
        self.set(columns::TAIL_NUM, tail)
    }

    pub fn route(self, origin_id: &str, dest_id: &str) -> Self {
        self.set(columns::ORIGIN_AIRPORT_ID, origin_id)
            .set(columns::DEST_AIRPORT_ID, dest_id)
    }

    pub fn delays(self, dep_delay: &str, arr_delay: &str) -> Self {
        self.set(columns::DEP_DELAY, dep_delay)
            .set(columns::ARR_DELAY, arr_delay)
    }

    pub fn distance(self, distance: &str) -> Self {
        self.set(columns::DISTANCE, distance)
    }

    pub fn diverted(self) -> Self {
        self.set(columns::DIVERTED, "1")
    }

    /// Render the row as a comma-separated line
    pub fn line(&self) -> String {
        self.fields.join(",")
    }

    /// Parse the row into a flight record
    pub fn flight(&self) -> Flight {
        let line = self.line();
        parse_flight_record(&split_row(&line), DatePolicy::Strict).unwrap()
    }
}

/// Helper to build file content from a header and rows
pub fn create_flight_csv(rows: &[FlightRow]) -> String {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(&row.line());
    }
    content
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
