//! Individual flight row parsing
//!
//! This module builds one [`Flight`] from the fixed 22-column layout and
//! classifies it for partitioning.

use super::field_parsers::{
    ColumnKind, clamp_binary_flag, clamp_clock_time, clamp_day_of_month, clamp_day_of_week,
    date_or_sentinel, get_field, int_or_column_default, split_row, string_or_default,
};
use crate::Result;
use crate::app::models::{Flight, FlightStatus};
use crate::config::DatePolicy;
use crate::constants::columns;

/// Build a validated flight record from the columns of one row
///
/// Short rows are accepted: every missing column takes its sentinel value.
pub fn parse_flight_record(fields: &[&str], date_policy: DatePolicy) -> Result<Flight> {
    let int = |index: usize| int_or_column_default(get_field(fields, index), ColumnKind::Other);
    let delay = |index: usize| int_or_column_default(get_field(fields, index), ColumnKind::Delay);
    let text = |index: usize| string_or_default(get_field(fields, index));

    let flight_date = date_or_sentinel(get_field(fields, columns::FLIGHT_DATE), date_policy)?;

    Ok(Flight {
        day_of_month: clamp_day_of_month(int(columns::DAY_OF_MONTH)),
        day_of_week: clamp_day_of_week(int(columns::DAY_OF_WEEK)),
        flight_date,
        unique_carrier: text(columns::UNIQUE_CARRIER),
        tail_num: text(columns::TAIL_NUM),
        origin_airport_id: text(columns::ORIGIN_AIRPORT_ID),
        origin: text(columns::ORIGIN),
        origin_state_name: text(columns::ORIGIN_STATE_NAME),
        dest_airport_id: text(columns::DEST_AIRPORT_ID),
        dest: text(columns::DEST),
        dest_state_name: text(columns::DEST_STATE_NAME),
        dep_time: clamp_clock_time(int(columns::DEP_TIME)),
        dep_delay: delay(columns::DEP_DELAY),
        wheels_off: clamp_clock_time(int(columns::WHEELS_OFF)),
        wheels_on: clamp_clock_time(int(columns::WHEELS_ON)),
        arr_time: clamp_clock_time(int(columns::ARR_TIME)),
        arr_delay: delay(columns::ARR_DELAY),
        cancelled: clamp_binary_flag(int(columns::CANCELLED)),
        cancellation_code: text(columns::CANCELLATION_CODE),
        diverted: clamp_binary_flag(int(columns::DIVERTED)),
        air_time: int(columns::AIR_TIME),
        distance: int(columns::DISTANCE),
    })
}

/// Split a raw line, build its record and classify it
pub fn parse_flight_line(line: &str, date_policy: DatePolicy) -> Result<(Flight, FlightStatus)> {
    let fields = split_row(line);
    let flight = parse_flight_record(&fields, date_policy)?;
    let status = flight.status();
    Ok((flight, status))
}
