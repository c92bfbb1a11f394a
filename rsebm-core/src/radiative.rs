//! Zero-dimensional radiative energy balance
//!
//! A planet absorbing a fraction $(1 - \alpha)$ of the incoming solar irradiance,
//! averaged over its surface, radiates as a blackbody at the emission temperature
//!
//! $$ T_e = \left( \frac{S (1 - \alpha)}{4 \sigma} \right)^{1/4} $$
//!
//! No validation is applied to the inputs. An albedo of 1 gives $T_e = 0$ and
//! non-physical inputs produce the corresponding non-physical numbers.

use crate::constants::{
    kelvin_to_celsius, PhysicalConstants, OBSERVED_ABSORBED, OBSERVED_OUTGOING,
    OBSERVED_REFLECTED,
};
use crate::FloatValue;
use is_close::is_close;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Global mean energy flows ($\text{W/m}^2$).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBudget {
    /// Reflected solar radiation
    pub reflected: FloatValue,
    /// Absorbed solar radiation
    pub absorbed: FloatValue,
    /// Outgoing longwave radiation
    pub outgoing: FloatValue,
}

impl EnergyBudget {
    /// Observed global mean flows from textbook Fig. 2.4.
    pub const OBSERVED: EnergyBudget = EnergyBudget {
        reflected: OBSERVED_REFLECTED,
        absorbed: OBSERVED_ABSORBED,
        outgoing: OBSERVED_OUTGOING,
    };

    /// Incoming solar radiation averaged over the sphere, $S/4$.
    pub fn incoming(&self) -> FloatValue {
        self.reflected + self.absorbed
    }

    /// Net downward flux at the top of the atmosphere.
    pub fn imbalance(&self) -> FloatValue {
        self.absorbed - self.outgoing
    }

    /// Whether outgoing longwave radiation balances the absorbed solar radiation.
    pub fn is_balanced(&self) -> bool {
        is_close!(self.absorbed, self.outgoing)
    }

    /// Flows as `[reflected, absorbed, outgoing]`.
    pub fn as_array(&self) -> [FloatValue; 3] {
        [self.reflected, self.absorbed, self.outgoing]
    }
}

/// Emission temperature alongside the observed reference values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Emission temperature (K)
    pub emission_temperature: FloatValue,
    /// Observed global mean surface temperature (K)
    pub observed_temperature: FloatValue,
    pub budget: EnergyBudget,
    pub observed_budget: EnergyBudget,
}

impl BalanceSummary {
    /// Warming of the observed surface relative to the emission temperature (K).
    pub fn greenhouse_effect(&self) -> FloatValue {
        self.observed_temperature - self.emission_temperature
    }
}

impl fmt::Display for BalanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Emission temperature: {:.2} K ({:.2} °C)",
            self.emission_temperature,
            kelvin_to_celsius(self.emission_temperature)
        )?;
        write!(
            f,
            "Observed global mean temperature: {} K ({:.2} °C)",
            self.observed_temperature,
            kelvin_to_celsius(self.observed_temperature)
        )
    }
}

/// Radiative balance calculations for a given set of physical constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadiativeBalance {
    constants: PhysicalConstants,
}

impl RadiativeBalance {
    pub fn from_constants(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// `s`, or the configured solar irradiance when not given.
    pub fn irradiance(&self, s: Option<FloatValue>) -> FloatValue {
        s.unwrap_or(self.constants.solar_irradiance)
    }

    /// `albedo`, or the configured albedo when not given.
    pub fn albedo(&self, albedo: Option<FloatValue>) -> FloatValue {
        albedo.unwrap_or(self.constants.albedo)
    }

    /// [`RadiativeBalance::emission_temperature`] with missing inputs taken from the
    /// constants.
    pub fn emission_temperature_or_default(
        &self,
        s: Option<FloatValue>,
        albedo: Option<FloatValue>,
    ) -> FloatValue {
        self.emission_temperature(self.irradiance(s), self.albedo(albedo))
    }

    /// [`RadiativeBalance::energy_budget`] with missing inputs taken from the constants.
    pub fn energy_budget_or_default(
        &self,
        s: Option<FloatValue>,
        albedo: Option<FloatValue>,
    ) -> EnergyBudget {
        self.energy_budget(self.irradiance(s), self.albedo(albedo))
    }

    /// [`RadiativeBalance::summary`] with missing inputs taken from the constants.
    pub fn summary_or_default(
        &self,
        s: Option<FloatValue>,
        albedo: Option<FloatValue>,
    ) -> BalanceSummary {
        self.summary(self.irradiance(s), self.albedo(albedo))
    }

    /// Emission temperature (K) for solar irradiance `s` ($\text{W/m}^2$) and `albedo`.
    pub fn emission_temperature(&self, s: FloatValue, albedo: FloatValue) -> FloatValue {
        ((s / 4.0) * (1.0 - albedo) / self.constants.sigma).powf(0.25)
    }

    /// Reflected, absorbed and outgoing flows at radiative equilibrium.
    ///
    /// `reflected + absorbed` is exactly $S/4$, and `outgoing` equals `absorbed` up to
    /// rounding because the outgoing flux is evaluated at the emission temperature.
    pub fn energy_budget(&self, s: FloatValue, albedo: FloatValue) -> EnergyBudget {
        let temperature = self.emission_temperature(s, albedo);
        EnergyBudget {
            reflected: albedo * s / 4.0,
            absorbed: (1.0 - albedo) * s / 4.0,
            outgoing: self.constants.sigma * temperature.powi(4),
        }
    }

    pub fn summary(&self, s: FloatValue, albedo: FloatValue) -> BalanceSummary {
        BalanceSummary {
            emission_temperature: self.emission_temperature(s, albedo),
            observed_temperature: self.constants.observed_temperature,
            budget: self.energy_budget(s, albedo),
            observed_budget: EnergyBudget::OBSERVED,
        }
    }
}

/// Emission temperature (K) using the default Stefan–Boltzmann constant.
pub fn emission_temperature(s: FloatValue, albedo: FloatValue) -> FloatValue {
    RadiativeBalance::default().emission_temperature(s, albedo)
}

/// Energy budget using the default Stefan–Boltzmann constant.
pub fn energy_budget(s: FloatValue, albedo: FloatValue) -> EnergyBudget {
    RadiativeBalance::default().energy_budget(s, albedo)
}
