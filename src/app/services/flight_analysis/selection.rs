//! Grouping and extreme-value selection over keyed counts
//!
//! Ties between equal values always resolve to the lexicographically smallest
//! key, so answers are reproducible regardless of hash map iteration order.

use crate::app::models::Flight;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count flights per key
pub fn count_by<'a, I, K>(flights: I, key: K) -> HashMap<String, u64>
where
    I: IntoIterator<Item = &'a Flight>,
    K: Fn(&'a Flight) -> &'a str,
{
    let mut counts = HashMap::new();
    for flight in flights {
        *counts.entry(key(flight).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Sum a per-flight value per key
pub fn sum_by<'a, I, K, V>(flights: I, key: K, value: V) -> HashMap<String, i64>
where
    I: IntoIterator<Item = &'a Flight>,
    K: Fn(&'a Flight) -> &'a str,
    V: Fn(&'a Flight) -> i64,
{
    let mut sums = HashMap::new();
    for flight in flights {
        *sums.entry(key(flight).to_string()).or_insert(0) += value(flight);
    }
    sums
}

/// Entry with the greatest value, smallest key on ties
pub fn max_entry<V, C>(map: &HashMap<String, V>, compare: C) -> Option<(&str, &V)>
where
    C: Fn(&V, &V) -> Ordering,
{
    select_entry(map, |candidate, best| compare(candidate, best))
}

/// Entry with the smallest value, smallest key on ties
pub fn min_entry<V, C>(map: &HashMap<String, V>, compare: C) -> Option<(&str, &V)>
where
    C: Fn(&V, &V) -> Ordering,
{
    select_entry(map, |candidate, best| compare(best, candidate))
}

/// Key with the greatest value for totally ordered values
pub fn max_key<V: Ord>(map: &HashMap<String, V>) -> Option<&str> {
    max_entry(map, V::cmp).map(|(key, _)| key)
}

/// Key with the smallest value for totally ordered values
pub fn min_key<V: Ord>(map: &HashMap<String, V>) -> Option<&str> {
    min_entry(map, V::cmp).map(|(key, _)| key)
}

/// `preference` returns `Greater` when the candidate should replace the current best
fn select_entry<V, P>(map: &HashMap<String, V>, preference: P) -> Option<(&str, &V)>
where
    P: Fn(&V, &V) -> Ordering,
{
    let mut best: Option<(&str, &V)> = None;
    for (key, value) in map {
        best = match best {
            None => Some((key.as_str(), value)),
            Some((best_key, best_value)) => match preference(value, best_value) {
                Ordering::Greater => Some((key.as_str(), value)),
                Ordering::Equal if key.as_str() < best_key => Some((key.as_str(), value)),
                _ => Some((best_key, best_value)),
            },
        };
    }
    best
}
