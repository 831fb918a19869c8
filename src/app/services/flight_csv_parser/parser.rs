//! Core flight file loader
//!
//! This module reads a flight history file line by line, skips the header,
//! builds a record per row and partitions the records into completed and
//! cancelled flights.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::parse_flight_line;
use super::stats::{FlightDataset, LoadResult, LoadStats};
use crate::config::DatePolicy;
use crate::{Error, Result};

/// Loader for comma-separated flight history files
///
/// An unreadable file is not an error: it is logged and yields an empty
/// dataset, so every question degrades to its "no information" answer. A
/// malformed flight date is fatal under [`DatePolicy::Strict`].
#[derive(Debug, Clone, Default)]
pub struct FlightCsvParser {
    date_policy: DatePolicy,
}

impl FlightCsvParser {
    /// Create a loader with the given date policy
    pub fn new(date_policy: DatePolicy) -> Self {
        Self { date_policy }
    }

    /// Load a flight file and partition its records
    pub fn load(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading flight data: {}", file_path.display());

        let file = match File::open(file_path) {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    "Failed to open {}: {}; continuing with an empty dataset",
                    file_path.display(),
                    e
                );
                return Ok(LoadResult::read_failure());
            }
        };

        let result = self.load_reader(BufReader::new(file))?;
        if !result.stats.read_failed {
            info!("Loaded {}", result.stats.summary());
        }
        Ok(result)
    }

    /// Load flight rows from any buffered reader
    ///
    /// The first line is a header and is skipped without inspection.
    pub fn load_reader<R: BufRead>(&self, mut reader: R) -> Result<LoadResult> {
        let mut dataset = FlightDataset::new();
        let mut stats = LoadStats::new();
        let mut buffer = Vec::new();
        let mut line_number = 0usize;

        loop {
            let line = match next_line(&mut reader, &mut buffer) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        "Read failed at line {}: {}; discarding partial data",
                        line_number + 1,
                        e
                    );
                    return Ok(LoadResult::read_failure());
                }
            };
            line_number += 1;

            if line_number == 1 {
                debug!("Skipping header: {}", line);
                continue;
            }

            let (flight, status) = parse_flight_line(&line, self.date_policy)
                .map_err(|e| Error::row_parsing(line_number, e))?;

            stats.record(status);
            if !dataset.push(flight, status) {
                debug!("Discarded row {}: missing departure or arrival time", line_number);
            }
        }

        Ok(LoadResult { dataset, stats })
    }
}

/// Read the next line without its terminator, replacing invalid UTF-8
///
/// A line ends at `\n`, `\r\n` or a lone `\r`.
fn next_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> std::io::Result<Option<String>> {
    buffer.clear();
    let mut read_any = false;

    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            break;
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                buffer.extend_from_slice(&available[..end]);
                reader.consume(end + 1);

                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(Some(String::from_utf8_lossy(buffer).into_owned()));
            }
            None => {
                let consumed = available.len();
                buffer.extend_from_slice(available);
                reader.consume(consumed);
            }
        }
    }

    Ok(read_any.then(|| String::from_utf8_lossy(buffer).into_owned()))
}
