//! Physical constants and reference values
//!
//! The defaults match the values used throughout the introductory energy balance
//! material: a present-day solar irradiance of 1360 $\text{W/m}^2$, a planetary
//! albedo of 0.3 and an observed global mean surface temperature of 288 K.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Stefan–Boltzmann constant ($\text{W/m}^2\text{/K}^4$).
pub const STEFAN_BOLTZMANN: FloatValue = 5.67e-8;

/// Offset between the Kelvin and Celsius scales.
pub const ZERO_CELSIUS: FloatValue = 273.15;

/// Length of the idealised year used by the orbital Fourier series (days).
pub const DAYS_PER_YEAR: usize = 365;

/// Observed global energy flows ($\text{W/m}^2$), read off textbook Fig. 2.4.
pub const OBSERVED_REFLECTED: FloatValue = 100.0;
pub const OBSERVED_ABSORBED: FloatValue = 240.0;
pub const OBSERVED_OUTGOING: FloatValue = 239.0;

/// Immutable set of constants shared by the radiative balance and insolation models.
///
/// # Default Values
///
/// | Field | Default |
/// |---|---|
/// | `sigma` | 5.67e-8 $\text{W/m}^2\text{/K}^4$ |
/// | `albedo` | 0.3 |
/// | `solar_irradiance` | 1360 $\text{W/m}^2$ |
/// | `observed_temperature` | 288 K |
/// | `latitude` | 47.6061° (Seattle) |
/// | `reference_year` | 2025 |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Stefan–Boltzmann constant ($\text{W/m}^2\text{/K}^4$).
    pub sigma: FloatValue,

    /// Planetary albedo (dimensionless).
    pub albedo: FloatValue,

    /// Total solar irradiance $S_0$ ($\text{W/m}^2$).
    pub solar_irradiance: FloatValue,

    /// Observed global mean surface temperature (K).
    pub observed_temperature: FloatValue,

    /// Default latitude for insolation calculations (degrees north).
    pub latitude: FloatValue,

    /// Calendar year used to turn an integer day of year into a date.
    ///
    /// Must be a non-leap year so that integer days never map onto Feb 29.
    pub reference_year: i32,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            sigma: STEFAN_BOLTZMANN,
            albedo: 0.3,
            solar_irradiance: 1360.0,
            observed_temperature: 288.0,
            latitude: 47.6061,
            reference_year: 2025,
        }
    }
}

/// Convert a temperature from Kelvin to degrees Celsius.
pub fn kelvin_to_celsius(temperature: FloatValue) -> FloatValue {
    temperature - ZERO_CELSIUS
}
