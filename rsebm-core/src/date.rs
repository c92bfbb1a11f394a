//! Date handling for insolation calculations
//!
//! Dates are supplied either as an ISO calendar date (`"2003-10-13"`) or as a 1-based
//! day of year (`286`). Both collapse to a single day index in `[0, 365]` which feeds
//! the orbital Fourier series.
//!
//! Integer days are mapped back onto a calendar in a fixed non-leap reference year
//! so that reports can show a human readable date. Calendar dates keep their own
//! year, so `"2024-02-29"` is accepted and resolves to day 60.

use crate::errors::{RSEBMError, RSEBMResult};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format accepted for calendar date strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when labelling an integer day of year, e.g. "13 October".
pub const LABEL_FORMAT: &str = "%d %B";

/// Either a calendar date or a day of year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateSpec {
    /// ISO calendar date in `yyyy-mm-dd` form.
    CalendarDate(String),
    /// 1-based day of year.
    DayOfYear(i64),
}

impl DateSpec {
    /// 1-based day of year.
    ///
    /// Calendar dates are resolved in their own year. Integer days must lie in `1..=366`.
    pub fn day_of_year(&self) -> RSEBMResult<u32> {
        match self {
            DateSpec::CalendarDate(date) => date_to_day_of_year(date),
            DateSpec::DayOfYear(day) => validate_day_of_year(*day),
        }
    }

    /// Zero-based day index used by the orbital calculations.
    pub fn day_index(&self) -> RSEBMResult<u32> {
        Ok(self.day_of_year()? - 1)
    }

    /// Calendar date this refers to.
    ///
    /// Integer days are placed in `reference_year`.
    pub fn to_date(&self, reference_year: i32) -> RSEBMResult<NaiveDate> {
        match self {
            DateSpec::CalendarDate(date) => parse_date(date),
            DateSpec::DayOfYear(day) => {
                day_of_year_to_date(validate_day_of_year(*day)?, reference_year)
            }
        }
    }

    /// Human readable label for reports.
    ///
    /// Calendar dates are shown as given, integer days as e.g. "13 October".
    pub fn label(&self, reference_year: i32) -> RSEBMResult<String> {
        match self {
            DateSpec::CalendarDate(date) => {
                parse_date(date)?;
                Ok(date.clone())
            }
            DateSpec::DayOfYear(_) => Ok(self
                .to_date(reference_year)?
                .format(LABEL_FORMAT)
                .to_string()),
        }
    }
}

impl Default for DateSpec {
    fn default() -> Self {
        DateSpec::CalendarDate("2003-10-13".to_string())
    }
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpec::CalendarDate(date) => write!(f, "{}", date),
            DateSpec::DayOfYear(day) => write!(f, "day {}", day),
        }
    }
}

impl From<&str> for DateSpec {
    fn from(value: &str) -> Self {
        DateSpec::CalendarDate(value.to_string())
    }
}

impl From<String> for DateSpec {
    fn from(value: String) -> Self {
        DateSpec::CalendarDate(value)
    }
}

impl From<i64> for DateSpec {
    fn from(value: i64) -> Self {
        DateSpec::DayOfYear(value)
    }
}

impl From<u32> for DateSpec {
    fn from(value: u32) -> Self {
        DateSpec::DayOfYear(value as i64)
    }
}

impl From<NaiveDate> for DateSpec {
    fn from(value: NaiveDate) -> Self {
        DateSpec::CalendarDate(value.format(DATE_FORMAT).to_string())
    }
}

fn parse_date(date: &str) -> RSEBMResult<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        RSEBMError::InvalidDateType(format!("unparseable date string {:?} ({})", date, e))
    })
}

fn validate_day_of_year(day: i64) -> RSEBMResult<u32> {
    if (1..=366).contains(&day) {
        Ok(day as u32)
    } else {
        Err(RSEBMError::DayOfYearOutOfRange(day))
    }
}

/// 1-based day of year of an ISO `yyyy-mm-dd` date string.
pub fn date_to_day_of_year(date: &str) -> RSEBMResult<u32> {
    Ok(parse_date(date)?.ordinal())
}

/// Calendar date of a 1-based day of year, counted from Jan 1 of `reference_year`.
///
/// `day` must lie in `1..=366`. Day 366 of a non-leap reference year rolls over to
/// Jan 1 of the following year.
pub fn day_of_year_to_date(day: u32, reference_year: i32) -> RSEBMResult<NaiveDate> {
    let day = validate_day_of_year(i64::from(day))?;
    let offset = Days::new(u64::from(day - 1));
    NaiveDate::from_ymd_opt(reference_year, 1, 1)
        .and_then(|start| start.checked_add_days(offset))
        .ok_or_else(|| {
            RSEBMError::Error(format!(
                "Cannot place day {} in reference year {}",
                day, reference_year
            ))
        })
}

/// ISO date string of a 1-based day of year in `reference_year`.
pub fn day_of_year_to_date_string(day: u32, reference_year: i32) -> RSEBMResult<String> {
    Ok(day_of_year_to_date(day, reference_year)?
        .format(DATE_FORMAT)
        .to_string())
}
