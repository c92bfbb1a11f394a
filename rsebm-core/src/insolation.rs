//! Daily average insolation
//!
//! The top-of-atmosphere insolation averaged over one day at latitude $\phi$ is
//!
//! $$ \bar{Q} = \frac{S}{\pi} \left(\frac{\bar{d}}{d}\right)^2
//!     \left( h_0 \sin\phi \sin\delta + \cos\phi \cos\delta \sin h_0 \right) $$
//!
//! where $\delta$ is the solar declination and $h_0$ the hour angle at sunset,
//! given by $\cos h_0 = -\tan\phi \tan\delta$. When the right hand side leaves
//! $[-1, 1]$ the sun either never rises ($h_0 = 0$) or never sets ($h_0 = \pi$).

use crate::constants::PhysicalConstants;
use crate::date::DateSpec;
use crate::errors::{RSEBMError, RSEBMResult};
use crate::orbit::{DistanceRatioSeries, OrbitalPosition};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

/// Sunlight conditions over a day at a given latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaylightRegime {
    /// The sun stays below the horizon all day.
    PolarNight,
    /// The sun stays above the horizon all day.
    PolarDay,
    /// Regular day with a sunrise and a sunset.
    SunriseSunset,
}

/// Sunset hour angle (radians) and the daylight regime it falls in.
///
/// `latitude` and `declination` are in radians.
pub fn hour_angle(
    latitude: FloatValue,
    declination: FloatValue,
) -> (FloatValue, DaylightRegime) {
    let tans = -latitude.tan() * declination.tan();
    if tans > 1.0 {
        (0.0, DaylightRegime::PolarNight)
    } else if tans < -1.0 {
        (PI, DaylightRegime::PolarDay)
    } else {
        (tans.acos(), DaylightRegime::SunriseSunset)
    }
}

/// Options for the insolation calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsolationParameters {
    /// Form of the Earth–Sun distance ratio series.
    /// Default: `Reference`
    pub distance_ratio: DistanceRatioSeries,

    /// Reject latitudes outside $[-90, 90]$ instead of computing them anyway.
    /// Default: false
    pub strict_latitude: bool,
}

/// Insolation on one day at one latitude, with the intermediate quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyInsolation {
    /// Solar irradiance ($\text{W/m}^2$)
    pub irradiance: FloatValue,
    /// Latitude (degrees north)
    pub latitude: FloatValue,
    /// Zero-based day index
    pub day_index: FloatValue,
    pub orbit: OrbitalPosition,
    /// Sunset hour angle (radians)
    pub hour_angle: FloatValue,
    pub regime: DaylightRegime,
    /// Daily average insolation ($\text{W/m}^2$)
    pub insolation: FloatValue,
}

impl DailyInsolation {
    /// Hours of daylight, $24 h_0 / \pi$.
    pub fn day_length_hours(&self) -> FloatValue {
        24.0 * self.hour_angle / PI
    }
}

/// Daily average insolation as a function of irradiance, latitude and date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsolationModel {
    constants: PhysicalConstants,
    parameters: InsolationParameters,
}

impl InsolationModel {
    pub fn new(constants: PhysicalConstants, parameters: InsolationParameters) -> Self {
        Self {
            constants,
            parameters,
        }
    }

    pub fn from_parameters(parameters: InsolationParameters) -> Self {
        Self::new(PhysicalConstants::default(), parameters)
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn parameters(&self) -> &InsolationParameters {
        &self.parameters
    }

    /// `s`, or the configured solar irradiance when not given.
    pub fn irradiance(&self, s: Option<FloatValue>) -> FloatValue {
        s.unwrap_or(self.constants.solar_irradiance)
    }

    /// `lat_deg`, or the configured latitude when not given.
    pub fn latitude(&self, lat_deg: Option<FloatValue>) -> FloatValue {
        lat_deg.unwrap_or(self.constants.latitude)
    }

    pub(crate) fn check_latitude(&self, latitude: FloatValue) -> RSEBMResult<()> {
        if (-90.0..=90.0).contains(&latitude) {
            return Ok(());
        }
        if self.parameters.strict_latitude {
            return Err(RSEBMError::LatitudeOutOfRange(latitude));
        }
        warn!(
            latitude = latitude,
            "Latitude outside [-90, 90]; insolation is not physically meaningful"
        );
        Ok(())
    }

    /// Full breakdown of the insolation calculation for a zero-based day index.
    pub fn detail(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
        day_index: FloatValue,
    ) -> DailyInsolation {
        let orbit = OrbitalPosition::from_day_index(day_index, self.parameters.distance_ratio);
        let dec = orbit.declination;
        let lat = lat_deg * PI / 180.0;

        let (h0, regime) = hour_angle(lat, dec);

        let insolation = (s / PI)
            * orbit.distance_ratio
            * (h0 * lat.sin() * dec.sin() + lat.cos() * dec.cos() * h0.sin());

        DailyInsolation {
            irradiance: s,
            latitude: lat_deg,
            day_index,
            orbit,
            hour_angle: h0,
            regime,
            insolation,
        }
    }

    /// Daily average insolation ($\text{W/m}^2$) for a zero-based day index.
    ///
    /// This is the unchecked kernel used by the batch scans.
    pub fn daily_mean(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
        day_index: FloatValue,
    ) -> FloatValue {
        self.detail(s, lat_deg, day_index).insolation
    }

    /// Daily average insolation ($\text{W/m}^2$) on `date`.
    pub fn average_daily_insolation(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
        date: &DateSpec,
    ) -> RSEBMResult<FloatValue> {
        Ok(self.resolve(s, lat_deg, date)?.insolation)
    }

    /// [`InsolationModel::average_daily_insolation`] with missing inputs taken from the
    /// constants.
    pub fn average_daily_insolation_or_default(
        &self,
        s: Option<FloatValue>,
        lat_deg: Option<FloatValue>,
        date: &DateSpec,
    ) -> RSEBMResult<FloatValue> {
        self.average_daily_insolation(self.irradiance(s), self.latitude(lat_deg), date)
    }

    /// Like [`InsolationModel::average_daily_insolation`] but returning the breakdown.
    pub fn resolve(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
        date: &DateSpec,
    ) -> RSEBMResult<DailyInsolation> {
        let day_index = date.day_index()?;
        self.check_latitude(lat_deg)?;
        Ok(self.detail(s, lat_deg, day_index as FloatValue))
    }

    /// One line report of the insolation on `date`.
    pub fn report(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
        date: &DateSpec,
    ) -> RSEBMResult<String> {
        let q = self.average_daily_insolation(s, lat_deg, date)?;
        Ok(format!(
            "Average daily insolation: {:.2} W/m^2 at latitude {:.0} degrees on {}",
            q,
            lat_deg,
            date.label(self.constants.reference_year)?
        ))
    }

    pub fn report_or_default(
        &self,
        s: Option<FloatValue>,
        lat_deg: Option<FloatValue>,
        date: &DateSpec,
    ) -> RSEBMResult<String> {
        self.report(self.irradiance(s), self.latitude(lat_deg), date)
    }
}

/// Daily average insolation ($\text{W/m}^2$) with the reference distance ratio series.
pub fn average_daily_insolation(
    s: FloatValue,
    lat_deg: FloatValue,
    date: &DateSpec,
) -> RSEBMResult<FloatValue> {
    InsolationModel::default().average_daily_insolation(s, lat_deg, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    const SEATTLE: FloatValue = 47.6061;

    #[test]
    fn test_seattle_october() {
        let date = DateSpec::from("2003-10-13");
        let q = average_daily_insolation(1360.0, SEATTLE, &date).unwrap();
        assert!((q - 228.17236527248164).abs() < 1e-9, "Q = {}", q);
    }

    #[test]
    fn test_string_and_integer_dates_agree() {
        let model = InsolationModel::default();
        let from_string = model
            .average_daily_insolation(1360.0, SEATTLE, &DateSpec::from("2003-10-13"))
            .unwrap();
        let from_integer = model
            .average_daily_insolation(1360.0, SEATTLE, &DateSpec::from(286u32))
            .unwrap();

        assert_eq!(from_string, from_integer);
    }

    #[test]
    fn test_hour_angle_branches() {
        let dec = 23.44_f64.to_radians();

        let (h0, regime) = hour_angle(FloatValue::to_radians(80.0), dec);
        assert_eq!((h0, regime), (PI, DaylightRegime::PolarDay));

        let (h0, regime) = hour_angle(FloatValue::to_radians(-80.0), dec);
        assert_eq!((h0, regime), (0.0, DaylightRegime::PolarNight));

        let (h0, regime) = hour_angle(0.0, dec);
        assert!(is_close!(h0, PI / 2.0));
        assert_eq!(regime, DaylightRegime::SunriseSunset);
    }

    #[test]
    fn test_equator_day_length() {
        let detail = InsolationModel::default().detail(1360.0, 0.0, 100.0);
        assert!(is_close!(detail.day_length_hours(), 12.0));
    }

    #[test]
    fn test_polar_day_and_night_day_length() {
        let model = InsolationModel::default();
        assert!(is_close!(
            model.detail(1360.0, 90.0, 171.0).day_length_hours(),
            24.0
        ));
        assert_eq!(model.detail(1360.0, -90.0, 171.0).day_length_hours(), 0.0);
    }

    #[test]
    fn test_corrected_distance_ratio() {
        let model = InsolationModel::from_parameters(InsolationParameters {
            distance_ratio: DistanceRatioSeries::Corrected,
            ..Default::default()
        });
        let q = model
            .average_daily_insolation(1360.0, SEATTLE, &DateSpec::from(286u32))
            .unwrap();

        assert!((q - 228.18292046516416).abs() < 1e-9, "Q = {}", q);
    }

    #[test]
    fn test_out_of_range_latitude() {
        let date = DateSpec::from(172u32);

        // Computed anyway by default
        assert!(average_daily_insolation(1360.0, 120.0, &date).is_ok());

        let strict = InsolationModel::from_parameters(InsolationParameters {
            strict_latitude: true,
            ..Default::default()
        });
        assert_eq!(
            strict.average_daily_insolation(1360.0, 120.0, &date),
            Err(RSEBMError::LatitudeOutOfRange(120.0))
        );
        assert!(strict.average_daily_insolation(1360.0, 90.0, &date).is_ok());
    }

    #[test]
    fn test_missing_inputs_use_constants() {
        let date = DateSpec::from(286u32);
        let model = InsolationModel::default();
        assert_eq!(
            model
                .average_daily_insolation_or_default(None, None, &date)
                .unwrap(),
            average_daily_insolation(1360.0, SEATTLE, &date).unwrap()
        );

        let model = InsolationModel::new(
            PhysicalConstants {
                solar_irradiance: 1000.0,
                latitude: -60.0,
                ..Default::default()
            },
            InsolationParameters::default(),
        );
        assert_eq!(
            model
                .average_daily_insolation_or_default(None, None, &date)
                .unwrap(),
            average_daily_insolation(1000.0, -60.0, &date).unwrap()
        );
        assert_eq!(
            model
                .average_daily_insolation_or_default(Some(1360.0), None, &date)
                .unwrap(),
            average_daily_insolation(1360.0, -60.0, &date).unwrap()
        );
        assert_eq!(
            model.report_or_default(None, Some(0.0), &date).unwrap(),
            model.report(1000.0, 0.0, &date).unwrap()
        );
    }

    #[test]
    fn test_invalid_date_propagates() {
        let err = average_daily_insolation(1360.0, SEATTLE, &DateSpec::from("2003/10/13"))
            .unwrap_err();
        assert!(matches!(err, RSEBMError::InvalidDateType(_)));
    }

    #[test]
    fn test_reports() {
        let model = InsolationModel::default();

        assert_eq!(
            model
                .report(1360.0, SEATTLE, &DateSpec::from(286u32))
                .unwrap(),
            "Average daily insolation: 228.17 W/m^2 at latitude 48 degrees on 13 October"
        );
        assert_eq!(
            model
                .report(1360.0, SEATTLE, &DateSpec::from("2003-10-13"))
                .unwrap(),
            "Average daily insolation: 228.17 W/m^2 at latitude 48 degrees on 2003-10-13"
        );
    }
}
