//! Analysis orchestration
//!
//! Builds the shared per-airport maps once and runs the nine questions in
//! report order against the same read-only dataset.

use tracing::{debug, info};

use super::airport_traffic::AirportTraffic;
use super::answer::Answer;
use super::{aircraft, airports, cancellations, delays};
use crate::app::services::flight_csv_parser::FlightDataset;
use crate::config::AnalysisConfig;
use crate::constants::QUESTION_COUNT;

/// Read-only state shared by every question
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    pub dataset: &'a FlightDataset,
    pub traffic: AirportTraffic,
    pub config: &'a AnalysisConfig,
}

impl<'a> AnalysisContext<'a> {
    /// Prepare the context, computing the per-airport maps from completed flights
    pub fn new(dataset: &'a FlightDataset, config: &'a AnalysisConfig) -> Self {
        let traffic = AirportTraffic::from_completed(&dataset.completed);
        debug!(
            "Airport maps: {} arrival keys, {} departure keys",
            traffic.arrivals().len(),
            traffic.departures().len()
        );

        Self {
            dataset,
            traffic,
            config,
        }
    }
}

/// Runs the fixed question set over a loaded dataset
#[derive(Debug, Clone, Default)]
pub struct FlightAnalyzer {
    config: AnalysisConfig,
}

impl FlightAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Answer all questions, in report order
    pub fn answer_all(&self, dataset: &FlightDataset) -> Vec<Answer> {
        info!(
            "Analysing {} completed and {} cancelled flights",
            dataset.completed.len(),
            dataset.cancelled.len()
        );

        let ctx = AnalysisContext::new(dataset, &self.config);
        let (net_source, net_sink) = airports::net_source_and_sink(&ctx);

        let answers = vec![
            cancellations::highest_cancellation_rate_carrier(&ctx),
            cancellations::most_common_cancellation_reason(&ctx),
            aircraft::aircraft_with_most_distance(&ctx),
            airports::busiest_airport(&ctx),
            net_source,
            net_sink,
            delays::long_delays_for_carrier(&ctx),
            delays::best_delay_recovery(&ctx),
            cancellations::state_with_most_weather_cancellations(&ctx),
        ];
        debug_assert_eq!(answers.len(), QUESTION_COUNT);

        for (index, answer) in answers.iter().enumerate() {
            debug!("Question {}: {}", index + 1, answer);
        }

        answers
    }
}
