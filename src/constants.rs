//! Application constants for the flight statistics tool
//!
//! This module contains the sentinel values, input column layout, fallback
//! messages and defaults used throughout the crate.

use chrono::NaiveDate;

// =============================================================================
// Sentinel Values
// =============================================================================

/// Substituted for any string column that is absent or empty
pub const NOT_FILLED: &str = "Not filled";

/// Substituted for a delay column that is absent from the row
pub const MISSING_DELAY: i32 = 1_000_000;

/// Substituted for any other integer column that is absent from the row
pub const MISSING_INTEGER: i32 = 0;

/// Year, month and day of the sentinel flight date (3999-01-01)
pub const SENTINEL_DATE_YMD: (i32, u32, u32) = (3999, 1, 1);

/// Sentinel flight date used when the date column is absent or has an unknown shape
pub fn sentinel_flight_date() -> NaiveDate {
    let (year, month, day) = SENTINEL_DATE_YMD;
    NaiveDate::from_ymd_opt(year, month, day).expect("3999-01-01 is a valid calendar date")
}

// =============================================================================
// Field Ranges
// =============================================================================

pub mod ranges {
    use std::ops::RangeInclusive;

    pub const DAY_OF_MONTH: RangeInclusive<i32> = 1..=31;
    pub const DAY_OF_WEEK: RangeInclusive<i32> = 1..=7;

    /// Days of month that may overflow a short month and are resolved to its last day
    pub const MONTH_END_DAYS: RangeInclusive<u32> = 29..=31;

    /// HHMM clock readings; 2400 is midnight at the end of the day
    pub const CLOCK_TIME: RangeInclusive<i32> = 1..=2400;

    pub const BINARY_FLAG: RangeInclusive<i32> = 0..=1;
}

// =============================================================================
// Input Layout
// =============================================================================

/// Field delimiter of the input file (no quoting or escaping is recognised)
pub const FIELD_DELIMITER: char = ',';

/// Zero-based positions of every column in a flight data row
pub mod columns {
    pub const DAY_OF_MONTH: usize = 0;
    pub const DAY_OF_WEEK: usize = 1;
    pub const FLIGHT_DATE: usize = 2;
    pub const UNIQUE_CARRIER: usize = 3;
    pub const TAIL_NUM: usize = 4;
    pub const ORIGIN_AIRPORT_ID: usize = 5;
    pub const ORIGIN: usize = 6;
    pub const ORIGIN_STATE_NAME: usize = 7;
    pub const DEST_AIRPORT_ID: usize = 8;
    pub const DEST: usize = 9;
    pub const DEST_STATE_NAME: usize = 10;
    pub const DEP_TIME: usize = 11;
    pub const DEP_DELAY: usize = 12;
    pub const WHEELS_OFF: usize = 13;
    pub const WHEELS_ON: usize = 14;
    pub const ARR_TIME: usize = 15;
    pub const ARR_DELAY: usize = 16;
    pub const CANCELLED: usize = 17;
    pub const CANCELLATION_CODE: usize = 18;
    pub const DIVERTED: usize = 19;
    pub const AIR_TIME: usize = 20;
    pub const DISTANCE: usize = 21;

    /// Number of columns in a complete row
    pub const COUNT: usize = 22;
}

/// Flight dates are only recognised as exactly eight characters
pub const DATE_TOKEN_LENGTH: usize = 8;

/// Date format for tokens such as `01-15-17`
pub const DASHED_DATE_FORMAT: &str = "%m-%d-%y";

/// Date format for tokens such as `01/15/17`
pub const SLASHED_DATE_FORMAT: &str = "%m/%d/%y";

/// Two-digit years are read as years of this century
pub const TWO_DIGIT_YEAR_BASE: i32 = 2000;

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Number of questions answered in every report
pub const QUESTION_COUNT: usize = 9;

/// Default name of the report written into the output directory
pub const DEFAULT_REPORT_FILE_NAME: &str = "answers.txt";

/// Default carrier examined by the long-delay question
pub const DEFAULT_DELAY_CARRIER: &str = "AA";

/// Default delay, in minutes, counted as a long delay
pub const DEFAULT_DELAY_THRESHOLD_MINUTES: i32 = 60;

/// Default cancellation code for weather-related cancellations
pub const DEFAULT_WEATHER_CANCELLATION_CODE: &str = "B";

// =============================================================================
// Fallback Messages
// =============================================================================

pub mod messages {
    pub const NO_CANCELLED_DATA: &str = "There is no information in the database about cancelled flights (or incomplete data are given on them)";

    pub const NO_COMPLETED_DATA: &str = "There is no information on completed flights in the database (or incomplete data are given for them)";

    pub const INCOMPLETE_DATA: &str = "The database does not contain flights with complete information necessary to answer this question";

    pub const NO_WEATHER_CANCELLATIONS: &str = "There are no flights in the database with a reason for cancellation due to weather conditions (B) (or incomplete data are given on them)";

    /// Shown by the command line when the analysis could not be completed
    pub const ANALYSIS_FAILED: &str =
        "Sorry, file upload and analysis failed. Please choose another file with the correct data.";
}
