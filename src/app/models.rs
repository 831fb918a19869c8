//! Data models for flight record processing
//!
//! This module contains the validated flight record built from one input row
//! and the classification that decides which collection the record joins.

use crate::constants::{MISSING_DELAY, NOT_FILLED};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Flight Record
// =============================================================================

/// One validated row of the flight history file
///
/// Every field always holds a value: missing or malformed input has already been
/// replaced by its sentinel (`"Not filled"`, `0`, `1000000` or 3999-01-01).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Day of the month, 1-31 (0 when invalid)
    pub day_of_month: i32,

    /// Day of the week, 1-7 (0 when invalid)
    pub day_of_week: i32,

    /// Scheduled flight date
    pub flight_date: NaiveDate,

    /// Carrier code (e.g. "AA")
    pub unique_carrier: String,

    /// Aircraft tail number
    pub tail_num: String,

    pub origin_airport_id: String,
    pub origin: String,
    pub origin_state_name: String,
    pub dest_airport_id: String,
    pub dest: String,
    pub dest_state_name: String,

    /// Actual departure time as HHMM (0 when invalid)
    pub dep_time: i32,

    /// Departure delay in minutes, negative when early
    pub dep_delay: i32,

    pub wheels_off: i32,
    pub wheels_on: i32,

    /// Actual arrival time as HHMM (0 when invalid)
    pub arr_time: i32,

    /// Arrival delay in minutes, negative when early
    pub arr_delay: i32,

    /// Cancellation flag, 0 or 1
    pub cancelled: i32,

    /// Cancellation reason code (e.g. "B" for weather)
    pub cancellation_code: String,

    /// Diversion flag, 0 or 1
    pub diverted: i32,

    pub air_time: i32,
    pub distance: i32,
}

/// Which collection a flight record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Flew (or was diverted) and carries usable times
    Completed,
    /// Cancellation flag set
    Cancelled,
    /// Neither cancelled nor diverted but missing a departure or arrival time
    Discarded,
}

impl Flight {
    /// Classify the record for partitioning
    pub fn status(&self) -> FlightStatus {
        if self.is_cancelled() {
            FlightStatus::Cancelled
        } else if !self.is_diverted() && (self.dep_time == 0 || self.arr_time == 0) {
            FlightStatus::Discarded
        } else {
            FlightStatus::Completed
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled == 1
    }

    pub fn is_diverted(&self) -> bool {
        self.diverted == 1
    }

    /// Whether the departure delay column was present in the row
    pub fn has_dep_delay(&self) -> bool {
        self.dep_delay != MISSING_DELAY
    }

    /// Whether the arrival delay column was present in the row
    pub fn has_arr_delay(&self) -> bool {
        self.arr_delay != MISSING_DELAY
    }
}

/// Check whether a string field carries real data
pub fn is_filled(value: &str) -> bool {
    value != NOT_FILLED
}
