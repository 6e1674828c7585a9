//! Stepping behaviour of the number and date inputs

use super::forms::parse_leading_int;
use chrono::{Days, Months, NaiveDate};

/// Storage format of the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How far a date input moves per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    DayForward,
    DayBack,
    YearForward,
    YearBack,
}

/// Step a number input by `delta`.
///
/// The current leading integer is the base; an empty or non-numeric value
/// counts as zero.
pub fn step_number(value: &str, delta: i64) -> String {
    let base = parse_leading_int(value).unwrap_or(0);
    base.saturating_add(delta).to_string()
}

/// Step a date input, starting from `today` when the value is not a date.
///
/// Steps that would leave chrono's supported range keep the current date.
pub fn step_date(value: &str, step: DateStep, today: NaiveDate) -> String {
    let Ok(current) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return today.format(DATE_FORMAT).to_string();
    };

    let next = match step {
        DateStep::DayForward => current.checked_add_days(Days::new(1)),
        DateStep::DayBack => current.checked_sub_days(Days::new(1)),
        DateStep::YearForward => current.checked_add_months(Months::new(12)),
        DateStep::YearBack => current.checked_sub_months(Months::new(12)),
    };

    next.unwrap_or(current).format(DATE_FORMAT).to_string()
}
