//! Radiative energy balance and daily insolation calculations.
//!
//! Two independent calculations are provided:
//! - [`radiative`]: emission temperature and global energy budget of a planet
//! - [`insolation`]: daily average top-of-atmosphere insolation by latitude and date,
//!   with year and latitude × day scans in [`scan`]
//!
//! ```rust
//! use rsebm_core::date::DateSpec;
//! use rsebm_core::insolation::average_daily_insolation;
//! use rsebm_core::radiative::emission_temperature;
//!
//! let temperature = emission_temperature(1360.0, 0.3);
//! assert!((temperature - 254.54).abs() < 0.01);
//!
//! let q = average_daily_insolation(1360.0, 47.6061, &DateSpec::from("2003-10-13")).unwrap();
//! assert!((q - 228.17).abs() < 0.01);
//! ```

pub mod config;
pub mod constants;
pub mod date;
pub mod errors;
pub mod insolation;
pub mod orbit;
pub mod python;
pub mod radiative;
pub mod scan;

pub type FloatValue = f64;

pub use config::ModelConfig;
pub use constants::PhysicalConstants;
pub use date::DateSpec;
pub use errors::{RSEBMError, RSEBMResult};
pub use insolation::{average_daily_insolation, InsolationModel};
pub use radiative::{emission_temperature, energy_budget, EnergyBudget, RadiativeBalance};
pub use scan::{insolation_grid, insolation_over_year, InsolationGrid};
