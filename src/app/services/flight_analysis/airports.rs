//! Airport questions built on [`AirportTraffic`](super::airport_traffic::AirportTraffic)

use super::analyzer::AnalysisContext;
use super::answer::{Answer, Fallback};
use super::selection::{max_key, min_key};

/// Airport with the most arrivals plus departures
pub fn busiest_airport(ctx: &AnalysisContext<'_>) -> Answer {
    if let Some(fallback) = traffic_fallback(ctx) {
        return fallback.into();
    }

    match max_key(&ctx.traffic.total_movements()) {
        Some(airport) => Answer::value(airport),
        None => Fallback::IncompleteData.into(),
    }
}

/// Largest net source and largest net sink of flights
///
/// Both answers are read from one `arrivals - departures` map: the source is
/// its maximum and the sink its minimum.
pub fn net_source_and_sink(ctx: &AnalysisContext<'_>) -> (Answer, Answer) {
    if let Some(fallback) = traffic_fallback(ctx) {
        return (fallback.into(), fallback.into());
    }

    let net_flow = ctx.traffic.net_flow();
    let source = max_key(&net_flow).map_or(Answer::from(Fallback::IncompleteData), Answer::value);
    let sink = min_key(&net_flow).map_or(Answer::from(Fallback::IncompleteData), Answer::value);
    (source, sink)
}

fn traffic_fallback(ctx: &AnalysisContext<'_>) -> Option<Fallback> {
    if ctx.dataset.completed.is_empty() {
        Some(Fallback::NoCompletedData)
    } else if ctx.traffic.is_empty() {
        Some(Fallback::IncompleteData)
    } else {
        None
    }
}
