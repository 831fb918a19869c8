//! Aggregation engine answering the nine flight statistics questions
//!
//! | # | Question | Source |
//! |---|---|---|
//! | 1 | Carrier with the highest cancellation rate | cancelled + completed |
//! | 2 | Most common cancellation reason | cancelled |
//! | 3 | Aircraft with the most cumulative distance | completed |
//! | 4 | Busiest airport | airport maps |
//! | 5 | Largest net source airport | airport maps |
//! | 6 | Largest net sink airport | airport maps |
//! | 7 | Long delays for one carrier | completed |
//! | 8 | Best delay recovery | completed |
//! | 9 | State with the most weather cancellations | cancelled |
//!
//! A question whose source collection is empty answers with a "no
//! information" fallback; one whose filtering leaves nothing answers with an
//! "incomplete data" fallback (question 9 has its own wording).

pub mod aircraft;
pub mod airport_traffic;
pub mod airports;
pub mod analyzer;
pub mod answer;
pub mod cancellations;
pub mod delays;
pub mod selection;

#[cfg(test)]
pub mod tests;

pub use airport_traffic::AirportTraffic;
pub use analyzer::{AnalysisContext, FlightAnalyzer};
pub use answer::{Answer, Fallback};
