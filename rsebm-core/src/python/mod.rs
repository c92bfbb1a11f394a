//! Python bindings for the energy balance and insolation calculations.
//!
//! Functions mirror the notebook helpers. Omitted irradiance, albedo and latitude
//! arguments fall back to [`PhysicalConstants`]: the present day irradiance, an
//! albedo of 0.3 and Seattle's latitude.

mod date;

use crate::constants::PhysicalConstants;
use crate::date::{day_of_year_to_date_string, DateSpec};
use crate::errors::RSEBMError;
use crate::insolation::{InsolationModel, InsolationParameters};
use crate::orbit::DistanceRatioSeries;
use crate::radiative::RadiativeBalance;
use crate::scan::DEFAULT_LATITUDE_RESOLUTION;
use crate::FloatValue;
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pythonize::pythonize;

use self::date::{extract_date, extract_optional_date};

impl From<RSEBMError> for PyErr {
    fn from(err: RSEBMError) -> PyErr {
        match err {
            RSEBMError::InvalidDateType(_) => PyTypeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn insolation_model(corrected_distance_ratio: bool) -> InsolationModel {
    let distance_ratio = if corrected_distance_ratio {
        DistanceRatioSeries::Corrected
    } else {
        DistanceRatioSeries::Reference
    };
    InsolationModel::from_parameters(InsolationParameters {
        distance_ratio,
        ..Default::default()
    })
}

/// Emission temperature (K) of a planet with solar irradiance `s` and albedo `albedo`.
///
/// Missing arguments default to the present day irradiance (1360 W/m^2) and an
/// albedo of 0.3.
#[pyfunction]
#[pyo3(signature = (s=None, albedo=None))]
fn emission_temperature(s: Option<FloatValue>, albedo: Option<FloatValue>) -> FloatValue {
    RadiativeBalance::default().emission_temperature_or_default(s, albedo)
}

/// Reflected, absorbed and outgoing flows (W/m^2) as a dict.
#[pyfunction]
#[pyo3(signature = (s=None, albedo=None))]
fn energy_budget(
    py: Python<'_>,
    s: Option<FloatValue>,
    albedo: Option<FloatValue>,
) -> PyResult<PyObject> {
    let budget = RadiativeBalance::default().energy_budget_or_default(s, albedo);
    Ok(pythonize(py, &budget)?.into())
}

/// Emission and observed temperature report.
#[pyfunction]
#[pyo3(signature = (s=None, albedo=None))]
fn energy_report(s: Option<FloatValue>, albedo: Option<FloatValue>) -> String {
    RadiativeBalance::default()
        .summary_or_default(s, albedo)
        .to_string()
}

/// Average daily insolation (W/m^2).
///
/// `date` is a "yyyy-mm-dd" string or an integer day of year. The latitude defaults
/// to Seattle (47.6061 degrees north).
#[pyfunction]
#[pyo3(signature = (s=None, lat_deg=None, date=None, corrected_distance_ratio=false))]
fn avg_daily_insolation(
    s: Option<FloatValue>,
    lat_deg: Option<FloatValue>,
    date: Option<&Bound<'_, PyAny>>,
    corrected_distance_ratio: bool,
) -> PyResult<FloatValue> {
    let date = extract_optional_date(date)?;
    Ok(insolation_model(corrected_distance_ratio)
        .average_daily_insolation_or_default(s, lat_deg, &date)?)
}

/// One line insolation report, labelling integer days with a calendar date.
#[pyfunction]
#[pyo3(signature = (s=None, lat_deg=None, date=None, corrected_distance_ratio=false))]
fn insolation_report(
    s: Option<FloatValue>,
    lat_deg: Option<FloatValue>,
    date: Option<&Bound<'_, PyAny>>,
    corrected_distance_ratio: bool,
) -> PyResult<String> {
    let date = extract_optional_date(date)?;
    Ok(insolation_model(corrected_distance_ratio).report_or_default(s, lat_deg, &date)?)
}

/// Daily insolation for each of the 365 days at one latitude.
#[pyfunction]
#[pyo3(signature = (s=None, lat_deg=None, corrected_distance_ratio=false))]
fn insolation_over_year<'py>(
    py: Python<'py>,
    s: Option<FloatValue>,
    lat_deg: Option<FloatValue>,
    corrected_distance_ratio: bool,
) -> PyResult<Bound<'py, PyArray1<FloatValue>>> {
    let model = insolation_model(corrected_distance_ratio);
    let values = model.insolation_over_year(model.irradiance(s), model.latitude(lat_deg))?;
    Ok(values.into_pyarray_bound(py))
}

/// Latitudes, days of year and the `[latitude, day]` insolation grid.
#[pyfunction]
#[pyo3(signature = (s=None, lat_resolution=DEFAULT_LATITUDE_RESOLUTION, corrected_distance_ratio=false))]
#[allow(clippy::type_complexity)]
fn insolation_grid<'py>(
    py: Python<'py>,
    s: Option<FloatValue>,
    lat_resolution: usize,
    corrected_distance_ratio: bool,
) -> PyResult<(
    Bound<'py, PyArray1<FloatValue>>,
    Bound<'py, PyArray1<FloatValue>>,
    Bound<'py, PyArray2<FloatValue>>,
)> {
    let model = insolation_model(corrected_distance_ratio);
    let grid = model.insolation_grid(model.irradiance(s), lat_resolution)?;
    Ok((
        grid.latitudes.into_pyarray_bound(py),
        grid.days.into_pyarray_bound(py),
        grid.values.into_pyarray_bound(py),
    ))
}

/// "yyyy-mm-dd" date of a day of year in the non-leap reference year.
#[pyfunction]
fn day_of_year_to_date(day: i64) -> PyResult<String> {
    let reference_year = PhysicalConstants::default().reference_year;
    let day = DateSpec::DayOfYear(day).day_of_year()?;
    Ok(day_of_year_to_date_string(day, reference_year)?)
}

/// Label used in reports for a date argument, e.g. "13 October" for day 286.
#[pyfunction]
#[pyo3(signature = (date=None))]
fn date_label(date: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
    let date = extract_optional_date(date)?;
    Ok(date.label(PhysicalConstants::default().reference_year)?)
}

/// Zero-based day index of a date argument.
#[pyfunction]
fn day_index(date: &Bound<'_, PyAny>) -> PyResult<u32> {
    Ok(extract_date(date)?.day_index()?)
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("SIGMA", PhysicalConstants::default().sigma)?;
    m.add("S_TRUE", PhysicalConstants::default().solar_irradiance)?;
    m.add("ALBEDO", PhysicalConstants::default().albedo)?;
    m.add("T_OBS", PhysicalConstants::default().observed_temperature)?;
    m.add_function(wrap_pyfunction!(emission_temperature, m)?)?;
    m.add_function(wrap_pyfunction!(energy_budget, m)?)?;
    m.add_function(wrap_pyfunction!(energy_report, m)?)?;
    m.add_function(wrap_pyfunction!(avg_daily_insolation, m)?)?;
    m.add_function(wrap_pyfunction!(insolation_report, m)?)?;
    m.add_function(wrap_pyfunction!(insolation_over_year, m)?)?;
    m.add_function(wrap_pyfunction!(insolation_grid, m)?)?;
    m.add_function(wrap_pyfunction!(day_of_year_to_date, m)?)?;
    m.add_function(wrap_pyfunction!(date_label, m)?)?;
    m.add_function(wrap_pyfunction!(day_index, m)?)?;
    Ok(())
}
