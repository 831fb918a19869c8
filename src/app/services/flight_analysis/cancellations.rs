//! Questions answered from the cancelled flights
//!
//! - carrier with the highest cancellation rate
//! - most common cancellation reason
//! - state with the most weather-related cancellations

use crate::app::models::is_filled;
use std::collections::HashMap;

use super::analyzer::AnalysisContext;
use super::answer::{Answer, Fallback};
use super::selection::{count_by, max_entry, max_key};

/// Carrier with the highest share of cancelled flights, as `"<carrier>,<percent>%"`
///
/// The share is `cancelled / (cancelled + completed) * 100`; diverted flights
/// are left out of the completed side. Only carriers with at least one
/// cancellation are ranked.
pub fn highest_cancellation_rate_carrier(ctx: &AnalysisContext<'_>) -> Answer {
    let dataset = ctx.dataset;
    if dataset.cancelled.is_empty() {
        return Fallback::NoCancelledData.into();
    }

    let flown = count_by(
        dataset
            .completed
            .iter()
            .filter(|f| !f.is_diverted() && is_filled(&f.unique_carrier)),
        |f| f.unique_carrier.as_str(),
    );
    let cancelled = count_by(
        dataset
            .cancelled
            .iter()
            .filter(|f| is_filled(&f.unique_carrier)),
        |f| f.unique_carrier.as_str(),
    );

    let rates: HashMap<String, f64> = cancelled
        .iter()
        .map(|(carrier, &count)| {
            let total = count + flown.get(carrier).copied().unwrap_or(0);
            (carrier.clone(), count as f64 / total as f64 * 100.0)
        })
        .collect();

    match max_entry(&rates, f64::total_cmp) {
        Some((carrier, rate)) => Answer::value(format!("{},{}%", carrier, format_percentage(*rate))),
        None => Fallback::IncompleteData.into(),
    }
}

/// Cancellation code that occurs most often
pub fn most_common_cancellation_reason(ctx: &AnalysisContext<'_>) -> Answer {
    let dataset = ctx.dataset;
    if dataset.cancelled.is_empty() {
        return Fallback::NoCancelledData.into();
    }

    let reasons = count_by(
        dataset
            .cancelled
            .iter()
            .filter(|f| is_filled(&f.cancellation_code)),
        |f| f.cancellation_code.as_str(),
    );

    match max_key(&reasons) {
        Some(code) => Answer::value(code),
        None => Fallback::IncompleteData.into(),
    }
}

/// Origin state with the most weather-coded cancellations
pub fn state_with_most_weather_cancellations(ctx: &AnalysisContext<'_>) -> Answer {
    let dataset = ctx.dataset;
    if dataset.cancelled.is_empty() {
        return Fallback::NoCancelledData.into();
    }

    let weather_code = ctx.config.weather_cancellation_code.as_str();
    let states = count_by(
        dataset.cancelled.iter().filter(|f| {
            is_filled(&f.origin_state_name)
                && is_filled(&f.cancellation_code)
                && f.cancellation_code.eq_ignore_ascii_case(weather_code)
        }),
        |f| f.origin_state_name.as_str(),
    );

    match max_key(&states) {
        Some(state) => Answer::value(state),
        None => Fallback::NoWeatherCancellations.into(),
    }
}

/// Shortest decimal that reads back as the same value, always with a fractional part
///
/// `50.0` stays `50.0` rather than `50`. Values below 1e-3 or from 1e7 upwards
/// use scientific notation with an upper-case exponent (`4.999975000125E-4`,
/// `1.0E7`).
pub fn format_percentage(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}
