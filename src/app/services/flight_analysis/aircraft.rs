//! Aircraft utilisation question

use crate::app::models::is_filled;

use super::analyzer::AnalysisContext;
use super::answer::{Answer, Fallback};
use super::selection::{max_key, sum_by};

/// Tail number with the greatest cumulative distance over completed flights
pub fn aircraft_with_most_distance(ctx: &AnalysisContext<'_>) -> Answer {
    let completed = &ctx.dataset.completed;
    if completed.is_empty() {
        return Fallback::NoCompletedData.into();
    }

    let distances = sum_by(
        completed
            .iter()
            .filter(|f| is_filled(&f.tail_num) && f.distance > 0),
        |f| f.tail_num.as_str(),
        |f| i64::from(f.distance),
    );

    match max_key(&distances) {
        Some(tail) => Answer::value(tail),
        None => Fallback::IncompleteData.into(),
    }
}
