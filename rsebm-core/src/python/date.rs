//! Conversion of Python date arguments into [`DateSpec`].
//!
//! Python callers pass either a `"yyyy-mm-dd"` string or something integer-like
//! (`int`, `numpy.int64`, a whole `float`). Anything else is rejected with
//! [`RSEBMError::InvalidDateType`].

use crate::date::DateSpec;
use crate::errors::{RSEBMError, RSEBMResult};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyString};

pub(crate) fn extract_date(date: &Bound<'_, PyAny>) -> RSEBMResult<DateSpec> {
    if date.is_instance_of::<PyString>() {
        let value: String = date
            .extract()
            .map_err(|e| RSEBMError::InvalidDateType(e.to_string()))?;
        return Ok(DateSpec::CalendarDate(value));
    }
    if let Ok(day) = date.extract::<i64>() {
        return Ok(DateSpec::DayOfYear(day));
    }
    if date.is_instance_of::<PyFloat>() {
        if let Ok(day) = date.extract::<f64>() {
            if day.is_finite() {
                return Ok(DateSpec::DayOfYear(day.trunc() as i64));
            }
        }
    }
    Err(RSEBMError::InvalidDateType(date.get_type().to_string()))
}

pub(crate) fn extract_optional_date(date: Option<&Bound<'_, PyAny>>) -> RSEBMResult<DateSpec> {
    match date {
        Some(date) => extract_date(date),
        None => Ok(DateSpec::default()),
    }
}
