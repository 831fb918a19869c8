//! Tests for the airport maps and the airport questions

use super::*;
use crate::app::services::flight_analysis::airport_traffic::AirportTraffic;
use crate::app::services::flight_analysis::airports::{busiest_airport, net_source_and_sink};
use crate::app::services::flight_analysis::answer::Fallback;
use crate::constants::NOT_FILLED;

fn routes() -> Vec<FlightRow> {
    // ATL: 3 as origin, 1 as destination
    // LAX: 1 as origin, 2 as destination
    // ORD: 0 as origin, 1 as destination
    vec![
        FlightRow::completed().route("ATL", "LAX"),
        FlightRow::completed().route("ATL", "LAX"),
        FlightRow::completed().route("ATL", "ORD"),
        FlightRow::completed().route("LAX", "ATL"),
    ]
}

#[test]
fn test_maps_are_keyed_by_origin_and_destination() {
    let dataset = dataset_from(&routes());
    let traffic = AirportTraffic::from_completed(&dataset.completed);

    assert_eq!(traffic.arrivals()["ATL"], 3);
    assert_eq!(traffic.arrivals()["LAX"], 1);
    assert!(!traffic.arrivals().contains_key("ORD"));

    assert_eq!(traffic.departures()["LAX"], 2);
    assert_eq!(traffic.departures()["ORD"], 1);
    assert_eq!(traffic.departures()["ATL"], 1);
}

#[test]
fn test_maps_never_contain_not_filled() {
    let dataset = dataset_from(&[
        FlightRow::completed().route("", "LAX"),
        FlightRow::completed().route("ATL", ""),
    ]);
    let traffic = AirportTraffic::from_completed(&dataset.completed);

    assert!(!traffic.arrivals().contains_key(NOT_FILLED));
    assert!(!traffic.departures().contains_key(NOT_FILLED));
    assert_eq!(traffic.arrivals().len(), 1);
    assert_eq!(traffic.departures().len(), 1);
}

#[test]
fn test_maps_ignore_cancelled_flights() {
    let dataset = dataset_from(&[FlightRow::cancelled().route("ATL", "LAX")]);
    let traffic = AirportTraffic::from_completed(&dataset.completed);

    assert!(traffic.is_empty());
}

#[test]
fn test_total_movements_and_net_flow() {
    let dataset = dataset_from(&routes());
    let traffic = AirportTraffic::from_completed(&dataset.completed);

    let totals = traffic.total_movements();
    assert_eq!(totals["ATL"], 4);
    assert_eq!(totals["LAX"], 3);
    assert_eq!(totals["ORD"], 1);

    let net = traffic.net_flow();
    assert_eq!(net["ATL"], 2);
    assert_eq!(net["LAX"], -1);
    assert_eq!(net["ORD"], -1);
}

#[test]
fn test_busiest_airport() {
    assert_eq!(answer_with(&routes(), busiest_airport), Answer::value("ATL"));
}

#[test]
fn test_net_source_and_sink() {
    let (source, sink) = answer_pair(&routes());

    assert_eq!(source, Answer::value("ATL"));
    // LAX and ORD tie at -1
    assert_eq!(sink, Answer::value("LAX"));
}

#[test]
fn test_net_source_is_never_below_net_sink() {
    let dataset = dataset_from(&routes());
    let traffic = AirportTraffic::from_completed(&dataset.completed);
    let net = traffic.net_flow();

    let (source, sink) = answer_pair(&routes());
    assert!(net[&source.to_string()] >= net[&sink.to_string()]);
}

#[test]
fn test_airport_questions_without_completed_flights() {
    let rows = [FlightRow::cancelled()];

    assert_eq!(
        answer_with(&rows, busiest_airport),
        Answer::Fallback(Fallback::NoCompletedData)
    );
    let (source, sink) = answer_pair(&rows);
    assert_eq!(source, Answer::Fallback(Fallback::NoCompletedData));
    assert_eq!(sink, Answer::Fallback(Fallback::NoCompletedData));
}

#[test]
fn test_airport_questions_without_airport_ids() {
    let rows = [FlightRow::completed().route("", "")];

    assert_eq!(
        answer_with(&rows, busiest_airport),
        Answer::Fallback(Fallback::IncompleteData)
    );
    let (source, sink) = answer_pair(&rows);
    assert_eq!(source, Answer::Fallback(Fallback::IncompleteData));
    assert_eq!(sink, Answer::Fallback(Fallback::IncompleteData));
}

fn answer_pair(rows: &[FlightRow]) -> (Answer, Answer) {
    let dataset = dataset_from(rows);
    let config = AnalysisConfig::default();
    let ctx = AnalysisContext::new(&dataset, &config);
    net_source_and_sink(&ctx)
}
