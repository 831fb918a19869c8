//! Flight history parser
//!
//! This module turns a comma-separated flight history file into two validated
//! collections: completed flights and cancelled flights.
//!
//! ## Architecture
//!
//! - [`parser`] - File reading, header skipping and partitioning
//! - [`record_parser`] - Building and classifying one record per row
//! - [`field_parsers`] - Field coercion with sentinel defaults
//! - [`stats`] - Dataset and load statistics structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flight_stats::app::services::flight_csv_parser::FlightCsvParser;
//! use flight_stats::config::DatePolicy;
//!
//! # fn example() -> flight_stats::Result<()> {
//! let parser = FlightCsvParser::new(DatePolicy::Strict);
//! let result = parser.load(std::path::Path::new("flights.csv"))?;
//!
//! println!("{} completed, {} cancelled",
//!          result.dataset.completed.len(),
//!          result.dataset.cancelled.len());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use parser::FlightCsvParser;
pub use stats::{FlightDataset, LoadResult, LoadStats};
