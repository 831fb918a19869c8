//! Field parsing utilities for flight data rows
//!
//! Every function here recovers from bad input by substituting the documented
//! sentinel value. The only failure that escapes is a date token that has the
//! shape of a date but does not parse, and only under [`DatePolicy::Strict`].

use crate::config::DatePolicy;
use crate::constants::{
    DASHED_DATE_FORMAT, DATE_TOKEN_LENGTH, FIELD_DELIMITER, MISSING_DELAY, MISSING_INTEGER,
    NOT_FILLED, SLASHED_DATE_FORMAT, TWO_DIGIT_YEAR_BASE, ranges, sentinel_flight_date,
};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use tracing::debug;

/// Kind of integer column, deciding the value used when the column is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Ordinary integer column, absent means 0
    Other,
    /// Delay column, absent means "no delay data" (1000000)
    Delay,
}

impl ColumnKind {
    /// Value substituted when the column is missing from the row
    pub fn missing_default(self) -> i32 {
        match self {
            ColumnKind::Other => MISSING_INTEGER,
            ColumnKind::Delay => MISSING_DELAY,
        }
    }
}

/// Split a raw line into column tokens
///
/// Splits on `,` without any quote handling and drops trailing empty tokens,
/// so `a,b,,` yields two columns and the empty tail counts as absent.
pub fn split_row(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Get the token at `index`, or `None` when the row is too short
pub fn get_field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields.get(index).copied()
}

/// Parse an integer token, returning 0 for anything that is not a valid `i32`
pub fn parse_int_or_zero(token: &str) -> i32 {
    token.parse::<i32>().unwrap_or(0)
}

fn clamp_to(value: i32, range: RangeInclusive<i32>) -> i32 {
    if range.contains(&value) { value } else { 0 }
}

/// Keep a day of month in 1-31, otherwise 0
pub fn clamp_day_of_month(value: i32) -> i32 {
    clamp_to(value, ranges::DAY_OF_MONTH)
}

/// Keep a day of week in 1-7, otherwise 0
pub fn clamp_day_of_week(value: i32) -> i32 {
    clamp_to(value, ranges::DAY_OF_WEEK)
}

/// Keep an HHMM clock reading in 1-2400, otherwise 0
pub fn clamp_clock_time(value: i32) -> i32 {
    clamp_to(value, ranges::CLOCK_TIME)
}

/// Keep a 0/1 flag, otherwise 0
pub fn clamp_binary_flag(value: i32) -> i32 {
    clamp_to(value, ranges::BINARY_FLAG)
}

/// Return the raw token, or `"Not filled"` when it is absent or empty
///
/// No trimming is applied: `" "` is kept as-is.
pub fn string_or_default(token: Option<&str>) -> String {
    match token {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => NOT_FILLED.to_string(),
    }
}

/// Parse an integer column, substituting the kind's default when the column is absent
///
/// A present but malformed token parses to 0 regardless of kind; no range check
/// is applied.
pub fn int_or_column_default(token: Option<&str>, kind: ColumnKind) -> i32 {
    match token {
        Some(value) => parse_int_or_zero(value),
        None => kind.missing_default(),
    }
}

/// Parse a flight date token
///
/// Only eight-character tokens are considered: one containing `-` is read as
/// `MM-dd-yy`, one containing `/` as `MM/dd/yy`. Every other shape, including an
/// absent or empty token, yields the sentinel date 3999-01-01. A token with a
/// recognised shape that fails to parse is an error under [`DatePolicy::Strict`]
/// and the sentinel under [`DatePolicy::Lenient`], except that a day of 29-31
/// past the end of its month is moved back to the month's last day.
pub fn date_or_sentinel(token: Option<&str>, policy: DatePolicy) -> Result<NaiveDate> {
    let Some(value) = token else {
        return Ok(sentinel_flight_date());
    };

    if value.chars().count() != DATE_TOKEN_LENGTH {
        return Ok(sentinel_flight_date());
    }

    let (format, separator) = if value.contains('-') {
        (DASHED_DATE_FORMAT, '-')
    } else if value.contains('/') {
        (SLASHED_DATE_FORMAT, '/')
    } else {
        return Ok(sentinel_flight_date());
    };

    match NaiveDate::parse_from_str(value, format) {
        Ok(date) => Ok(normalize_two_digit_year(date)),
        Err(e) => match resolve_month_end(value, separator) {
            Some(date) => {
                debug!("Date '{}' moved back to the end of its month: {}", value, date);
                Ok(date)
            }
            None => match policy {
                DatePolicy::Strict => Err(Error::datetime_parsing(
                    format!("Invalid flight date '{}' (expected {})", value, format),
                    e,
                )),
                DatePolicy::Lenient => {
                    debug!("Substituting sentinel date for malformed token '{}'", value);
                    Ok(sentinel_flight_date())
                }
            },
        },
    }
}

/// Read `MM?dd?yy` with a day of 29-31 past the end of its month as the month's last day
///
/// `02-30-17` becomes 2017-02-28 and `04/31/17` becomes 2017-04-30. A day above
/// 31, a month outside 1-12 or a non-digit part yields `None`.
fn resolve_month_end(value: &str, separator: char) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split(separator).collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    if [month, day, year]
        .iter()
        .any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year = TWO_DIGIT_YEAR_BASE + year.parse::<i32>().ok()?;
    if !ranges::MONTH_END_DAYS.contains(&day) {
        return None;
    }

    (28..=day)
        .rev()
        .find_map(|last_day| NaiveDate::from_ymd_opt(year, month, last_day))
}

/// Move a two-digit year into 2000-2099
///
/// chrono reads `%y` values 69-99 as 1969-1999.
fn normalize_two_digit_year(date: NaiveDate) -> NaiveDate {
    if date.year() >= TWO_DIGIT_YEAR_BASE {
        return date;
    }
    date.with_year(date.year() + 100).unwrap_or(date)
}
