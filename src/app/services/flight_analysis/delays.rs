//! Delay questions over completed flights

use crate::app::models::{Flight, is_filled};

use super::analyzer::AnalysisContext;
use super::answer::{Answer, Fallback};

/// Number of the configured carrier's flights delayed by at least the threshold
///
/// A flight counts once: either its departure delay reached the threshold, or
/// it left in time but its arrival delay reached the threshold. Diverted flights
/// and absent delay columns are ignored.
pub fn long_delays_for_carrier(ctx: &AnalysisContext<'_>) -> Answer {
    let completed = &ctx.dataset.completed;
    if completed.is_empty() {
        return Fallback::NoCompletedData.into();
    }

    let threshold = ctx.config.delay_threshold_minutes;
    let carrier = ctx.config.delay_carrier.as_str();
    let carrier_flights = || {
        completed
            .iter()
            .filter(move |f| !f.is_diverted() && f.unique_carrier.eq_ignore_ascii_case(carrier))
    };

    let late_departures = carrier_flights()
        .filter(|f| f.has_dep_delay() && f.dep_delay >= threshold)
        .count();
    let late_arrivals = carrier_flights()
        .filter(|f| f.has_arr_delay() && f.dep_delay < threshold && f.arr_delay >= threshold)
        .count();

    Answer::value((late_departures + late_arrivals).to_string())
}

/// Flight that departed latest yet arrived on or before schedule
///
/// Rendered as `"<dayOfMonth>,<depDelay>,<tailNum>"`. On equal departure delays
/// the earliest flight in the file wins.
pub fn best_delay_recovery(ctx: &AnalysisContext<'_>) -> Answer {
    let completed = &ctx.dataset.completed;
    if completed.is_empty() {
        return Fallback::NoCompletedData.into();
    }

    let best = completed
        .iter()
        .filter(|f| recovered_delay(f))
        .reduce(|best, f| if f.dep_delay > best.dep_delay { f } else { best });

    match best {
        Some(f) => Answer::value(format!("{},{},{}", f.day_of_month, f.dep_delay, f.tail_num)),
        None => Fallback::IncompleteData.into(),
    }
}

fn recovered_delay(flight: &Flight) -> bool {
    is_filled(&flight.tail_num)
        && flight.day_of_month != 0
        && !flight.is_diverted()
        && flight.has_dep_delay()
        && flight.arr_delay <= 0
}
