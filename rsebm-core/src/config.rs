//! Model configuration
//!
//! All settings can be read from TOML. Missing tables and keys fall back to their
//! defaults, so a configuration file only needs to list what it changes:
//!
//! ```toml
//! [constants]
//! solar_irradiance = 1361.0
//!
//! [insolation]
//! distance_ratio = "corrected"
//! ```

use crate::constants::PhysicalConstants;
use crate::errors::RSEBMResult;
use crate::insolation::{InsolationModel, InsolationParameters};
use crate::radiative::RadiativeBalance;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub constants: PhysicalConstants,
    pub insolation: InsolationParameters,
}

impl ModelConfig {
    pub fn from_toml_str(content: &str) -> RSEBMResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> RSEBMResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> RSEBMResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn radiative_balance(&self) -> RadiativeBalance {
        RadiativeBalance::from_constants(self.constants)
    }

    pub fn insolation_model(&self) -> InsolationModel {
        InsolationModel::new(self.constants, self.insolation)
    }
}
