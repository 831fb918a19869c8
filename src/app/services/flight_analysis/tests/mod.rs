//! Test utilities for the analysis questions

use crate::app::services::flight_csv_parser::FlightDataset;
use crate::app::services::flight_csv_parser::tests::FlightRow;
use crate::config::AnalysisConfig;

use super::analyzer::AnalysisContext;
use super::answer::Answer;

mod airport_tests;

/// Build a dataset, routing each row by its own classification
pub fn dataset_from(rows: &[FlightRow]) -> FlightDataset {
    let mut dataset = FlightDataset::new();
    for row in rows {
        let flight = row.flight();
        let status = flight.status();
        dataset.push(flight, status);
    }
    dataset
}

/// Run one question with the default configuration
pub fn answer_with<F>(rows: &[FlightRow], question: F) -> Answer
where
    F: Fn(&AnalysisContext<'_>) -> Answer,
{
    let dataset = dataset_from(rows);
    let config = AnalysisConfig::default();
    let ctx = AnalysisContext::new(&dataset, &config);
    question(&ctx)
}
