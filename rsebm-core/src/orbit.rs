//! Orbital parameters from the day of year
//!
//! Solar declination and the Earth–Sun distance ratio are evaluated with truncated
//! Fourier series in the fraction-of-year angle
//!
//! $$ \theta_d = \frac{2 \pi d}{365} $$
//!
//! where $d$ is the zero-based day index. The length of the year is fixed at 365
//! days; leap years are not distinguished.

use crate::constants::DAYS_PER_YEAR;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// Declination coefficients (radians)
const DEC_N0: FloatValue = 0.006918;
const DEC_COS1: FloatValue = -0.399912;
const DEC_SIN1: FloatValue = 0.070257;
const DEC_COS2: FloatValue = -0.006758;
const DEC_SIN2: FloatValue = 0.000907;
const DEC_COS3: FloatValue = -0.002697;
const DEC_SIN3: FloatValue = 0.00148;

// Distance ratio coefficients
const DIST_M0: FloatValue = 1.00011;
const DIST_COS1: FloatValue = 0.034221;
const DIST_SIN1: FloatValue = 0.00128;
const DIST_COS2: FloatValue = 0.000719;
const DIST_SIN2: FloatValue = 0.000077;

/// Which form of the distance ratio series to evaluate.
///
/// `Reference` reproduces the calibrated course material, whose last term is
/// $0.000077 \sin\theta_d$. `Corrected` uses $0.000077 \sin 2\theta_d$ as in the
/// published series. The two differ by less than $10^{-4}$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceRatioSeries {
    #[default]
    Reference,
    Corrected,
}

/// Fraction of the year expressed as an angle (radians).
pub fn year_angle(day_index: FloatValue) -> FloatValue {
    2.0 * PI * day_index / DAYS_PER_YEAR as FloatValue
}

/// Solar declination (radians).
///
/// $$ \delta = n_0 + n_1 + n_2 + n_3 $$
///
/// with $n_k = a_k \cos k\theta_d + b_k \sin k\theta_d$.
pub fn declination(theta_d: FloatValue) -> FloatValue {
    let n0 = DEC_N0;
    let n1 = DEC_COS1 * theta_d.cos() + DEC_SIN1 * theta_d.sin();
    let n2 = DEC_COS2 * (2.0 * theta_d).cos() + DEC_SIN2 * (2.0 * theta_d).sin();
    let n3 = DEC_COS3 * (3.0 * theta_d).cos() + DEC_SIN3 * (3.0 * theta_d).sin();
    n0 + n1 + n2 + n3
}

/// Squared ratio of mean to actual Earth–Sun distance (dimensionless).
pub fn distance_ratio(theta_d: FloatValue, series: DistanceRatioSeries) -> FloatValue {
    let m0 = DIST_M0;
    let m1 = DIST_COS1 * theta_d.cos() + DIST_SIN1 * theta_d.sin();
    let sine_angle = match series {
        DistanceRatioSeries::Reference => theta_d,
        DistanceRatioSeries::Corrected => 2.0 * theta_d,
    };
    let m2 = DIST_COS2 * (2.0 * theta_d).cos() + DIST_SIN2 * sine_angle.sin();
    m0 + m1 + m2
}

/// Orbital state of the Earth on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalPosition {
    /// Fraction-of-year angle (radians)
    pub theta_d: FloatValue,
    /// Solar declination (radians)
    pub declination: FloatValue,
    /// Squared mean-to-actual Earth–Sun distance ratio
    pub distance_ratio: FloatValue,
}

impl OrbitalPosition {
    pub fn from_day_index(day_index: FloatValue, series: DistanceRatioSeries) -> Self {
        let theta_d = year_angle(day_index);
        Self {
            theta_d,
            declination: declination(theta_d),
            distance_ratio: distance_ratio(theta_d, series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_year_angle() {
        assert_eq!(year_angle(0.0), 0.0);
        assert!(is_close!(year_angle(365.0), 2.0 * PI));
    }

    #[test]
    fn test_declination_at_solstices() {
        // Jun 21 and Dec 21 (zero-based day index)
        let june = declination(year_angle(171.0));
        let december = declination(year_angle(354.0));

        assert!((june.to_degrees() - 23.45).abs() < 0.1, "June = {}", june);
        assert!(
            (december.to_degrees() + 23.42).abs() < 0.1,
            "December = {}",
            december
        );
    }

    #[test]
    fn test_declination_near_zero_at_equinox() {
        let march = declination(year_angle(79.0));
        assert!(march.abs() < 0.01, "March = {}", march);
    }

    #[test]
    fn test_distance_ratio_perihelion_aphelion() {
        let january = distance_ratio(0.0, DistanceRatioSeries::Reference);
        let july = distance_ratio(year_angle(183.0), DistanceRatioSeries::Reference);

        // Jan 1: 1.00011 + 0.034221 + 0.000719
        assert!(is_close!(january, 1.03505));
        assert!(july < 0.97, "July = {}", july);
    }

    #[test]
    fn test_corrected_series_differs_only_in_last_term() {
        let theta_d = year_angle(285.0);
        let reference = distance_ratio(theta_d, DistanceRatioSeries::Reference);
        let corrected = distance_ratio(theta_d, DistanceRatioSeries::Corrected);
        let expected = DIST_SIN2 * ((2.0 * theta_d).sin() - theta_d.sin());

        assert!((corrected - reference - expected).abs() < 1e-15);
        assert!((corrected - reference).abs() < 1e-4);
    }

    #[test]
    fn test_orbital_position() {
        let position = OrbitalPosition::from_day_index(285.0, DistanceRatioSeries::Reference);

        assert!((position.declination - -0.1303571280431215).abs() < 1e-12);
        assert!((position.distance_ratio - 1.0046985127916628).abs() < 1e-12);
    }

    #[test]
    fn test_series_serialization() {
        let json = serde_json::to_string(&DistanceRatioSeries::Corrected).unwrap();
        assert_eq!(json, r#""corrected""#);
    }
}
