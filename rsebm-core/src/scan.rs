//! Seasonal and latitudinal scans of daily insolation
//!
//! Both scans are pure maps over [`InsolationModel::daily_mean`]: the year scan
//! evaluates day indices `0..365` at a fixed latitude, the grid scan evaluates every
//! (latitude, day) pair. Results are recomputed on every call.

use crate::constants::DAYS_PER_YEAR;
use crate::errors::{RSEBMError, RSEBMResult};
use crate::insolation::InsolationModel;
use crate::FloatValue;
use ndarray::{Array, Array1, Array2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Latitude resolution of the reference heatmap: one point per degree from -90 to 90.
pub const DEFAULT_LATITUDE_RESOLUTION: usize = 181;

/// Daily insolation over latitude and day of year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsolationGrid {
    /// Latitudes (degrees north), ascending from -90 to 90
    pub latitudes: Array1<FloatValue>,
    /// 1-based days of year
    pub days: Array1<FloatValue>,
    /// Insolation ($\text{W/m}^2$) indexed as `[latitude, day]`
    pub values: Array2<FloatValue>,
}

impl InsolationGrid {
    /// Annual mean insolation at each latitude.
    pub fn annual_mean_by_latitude(&self) -> Array1<FloatValue> {
        self.values
            .mean_axis(Axis(1))
            .unwrap_or_else(|| Array1::zeros(self.latitudes.len()))
    }

    /// Area weighted global and annual mean insolation.
    ///
    /// Each latitude is weighted by $\cos\phi$. For the full sphere this is close to $S/4$.
    pub fn global_annual_mean(&self) -> FloatValue {
        let weights = self.latitudes.mapv(|lat| lat.to_radians().cos().max(0.0));
        let total_weight = weights.sum();
        if total_weight == 0.0 {
            return 0.0;
        }
        (self.annual_mean_by_latitude() * &weights).sum() / total_weight
    }
}

impl InsolationModel {
    /// Lazily evaluate the daily insolation for day indices `0..365`.
    ///
    /// Each call returns a fresh iterator.
    pub fn year_iter(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
    ) -> impl Iterator<Item = FloatValue> + '_ {
        (0..DAYS_PER_YEAR).map(move |day| self.daily_mean(s, lat_deg, day as FloatValue))
    }

    /// Daily insolation for every day of the year at one latitude.
    pub fn insolation_over_year(
        &self,
        s: FloatValue,
        lat_deg: FloatValue,
    ) -> RSEBMResult<Array1<FloatValue>> {
        self.check_latitude(lat_deg)?;
        debug!(latitude = lat_deg, irradiance = s, "Scanning insolation over a year");
        Ok(self.year_iter(s, lat_deg).collect())
    }

    /// Daily insolation on a grid of `lat_resolution` evenly spaced latitudes from -90
    /// to 90 degrees and every day of the year.
    ///
    /// Latitude rows are evaluated in parallel.
    pub fn insolation_grid(
        &self,
        s: FloatValue,
        lat_resolution: usize,
    ) -> RSEBMResult<InsolationGrid> {
        if lat_resolution < 2 {
            return Err(RSEBMError::InvalidResolution(lat_resolution));
        }
        debug!(
            lat_resolution = lat_resolution,
            irradiance = s,
            "Scanning insolation over latitude and day of year"
        );

        let latitudes = Array::linspace(-90.0, 90.0, lat_resolution);
        let days = Array::range(1.0, DAYS_PER_YEAR as FloatValue + 1.0, 1.0);

        let values: Vec<FloatValue> = latitudes
            .to_vec()
            .into_par_iter()
            .flat_map_iter(|lat| self.year_iter(s, lat).collect::<Vec<_>>())
            .collect();
        let values = Array2::from_shape_vec((lat_resolution, DAYS_PER_YEAR), values)
            .map_err(|e| RSEBMError::Error(e.to_string()))?;

        Ok(InsolationGrid {
            latitudes,
            days,
            values,
        })
    }
}

/// Daily insolation over the year at one latitude, with default constants.
pub fn insolation_over_year(
    s: FloatValue,
    lat_deg: FloatValue,
) -> RSEBMResult<Array1<FloatValue>> {
    InsolationModel::default().insolation_over_year(s, lat_deg)
}

/// Daily insolation on a latitude × day grid, with default constants.
pub fn insolation_grid(s: FloatValue, lat_resolution: usize) -> RSEBMResult<InsolationGrid> {
    InsolationModel::default().insolation_grid(s, lat_resolution)
}
