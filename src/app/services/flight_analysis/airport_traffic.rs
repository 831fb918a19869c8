//! Per-airport flight counts shared by the airport questions

use crate::app::models::{Flight, is_filled};
use std::collections::HashMap;

use super::selection::count_by;

/// Completed-flight counts per airport id
///
/// `arrivals` is keyed by the origin airport id and `departures` by the
/// destination airport id. The names are kept as the report has always used
/// them; only their sum and difference are ever observed. Airports whose id is
/// `"Not filled"` never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirportTraffic {
    arrivals: HashMap<String, u64>,
    departures: HashMap<String, u64>,
}

impl AirportTraffic {
    /// Build both maps from the completed flights
    pub fn from_completed(completed: &[Flight]) -> Self {
        let arrivals = count_by(
            completed.iter().filter(|f| is_filled(&f.origin_airport_id)),
            |f| f.origin_airport_id.as_str(),
        );
        let departures = count_by(
            completed.iter().filter(|f| is_filled(&f.dest_airport_id)),
            |f| f.dest_airport_id.as_str(),
        );

        Self {
            arrivals,
            departures,
        }
    }

    pub fn arrivals(&self) -> &HashMap<String, u64> {
        &self.arrivals
    }

    pub fn departures(&self) -> &HashMap<String, u64> {
        &self.departures
    }

    /// Whether neither map has any airport
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty() && self.departures.is_empty()
    }

    /// `arrivals + departures` over the union of airports
    pub fn total_movements(&self) -> HashMap<String, u64> {
        let mut totals = self.arrivals.clone();
        for (airport, count) in &self.departures {
            *totals.entry(airport.clone()).or_insert(0) += count;
        }
        totals
    }

    /// `arrivals - departures` over the union of airports
    pub fn net_flow(&self) -> HashMap<String, i64> {
        let mut net: HashMap<String, i64> = self
            .arrivals
            .iter()
            .map(|(airport, &count)| (airport.clone(), count as i64))
            .collect();
        for (airport, &count) in &self.departures {
            *net.entry(airport.clone()).or_insert(0) -= count as i64;
        }
        net
    }
}
