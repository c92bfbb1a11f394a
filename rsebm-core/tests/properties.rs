//! Physical properties of the energy balance and insolation calculations.
//!
//! These tests check the behaviour a reader of the course material relies on:
//! - the classic energy balance numbers
//! - conservation in the energy budget
//! - polar day and night at the solstices
//! - consistency between date formats and between the scans

use approx::assert_relative_eq;
use rsebm_core::date::{date_to_day_of_year, day_of_year_to_date_string};
use rsebm_core::insolation::DaylightRegime;
use rsebm_core::{
    average_daily_insolation, emission_temperature, energy_budget, insolation_grid,
    insolation_over_year, DateSpec, InsolationModel, RSEBMError,
};

const SAMPLES: [(f64, f64); 6] = [
    (1360.0, 0.3),
    (1361.0, 0.0),
    (2601.0, 0.77),
    (589.0, 0.25),
    (1.0, 0.5),
    (1360.0, 0.99),
];

mod radiative_balance {
    use super::*;

    #[test]
    fn test_present_day_emission_temperature() {
        assert_relative_eq!(emission_temperature(1360.0, 0.3), 254.5356, epsilon = 1e-3);
    }

    #[test]
    fn test_reflected_plus_absorbed_is_quarter_irradiance() {
        for (s, albedo) in SAMPLES {
            let budget = energy_budget(s, albedo);
            assert_relative_eq!(
                budget.reflected + budget.absorbed,
                s / 4.0,
                max_relative = f64::EPSILON * 4.0
            );
        }
    }

    #[test]
    fn test_outgoing_balances_absorbed() {
        for (s, albedo) in SAMPLES {
            let budget = energy_budget(s, albedo);
            assert_relative_eq!(budget.outgoing, budget.absorbed, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_brighter_planet_is_colder() {
        let dark = emission_temperature(1360.0, 0.1);
        let bright = emission_temperature(1360.0, 0.6);
        assert!(dark > bright);
    }
}

mod insolation {
    use super::*;

    #[test]
    fn test_date_string_and_day_of_year_agree() {
        let from_string =
            average_daily_insolation(1360.0, 47.6061, &DateSpec::from("2003-10-13")).unwrap();
        let from_integer =
            average_daily_insolation(1360.0, 47.6061, &DateSpec::from(286i64)).unwrap();

        assert_eq!(from_string, from_integer);
    }

    #[test]
    fn test_june_solstice_poles() {
        let model = InsolationModel::default();
        let north = model.detail(1360.0, 90.0, 171.0);
        let south = model.detail(1360.0, -90.0, 171.0);

        assert_eq!(south.regime, DaylightRegime::PolarNight);
        assert_eq!(south.insolation, 0.0);

        assert_eq!(north.regime, DaylightRegime::PolarDay);
        assert_relative_eq!(north.insolation, 523.657, epsilon = 1e-3);

        let annual_max = insolation_over_year(1360.0, 90.0)
            .unwrap()
            .fold(f64::MIN, |a, &b| a.max(b));
        assert_relative_eq!(north.insolation, annual_max, max_relative = 0.01);
    }

    #[test]
    fn test_december_solstice_poles() {
        let model = InsolationModel::default();
        let north = model.detail(1360.0, 90.0, 354.0);
        let south = model.detail(1360.0, -90.0, 354.0);

        assert_eq!(north.regime, DaylightRegime::PolarNight);
        assert_eq!(north.insolation, 0.0);

        assert_eq!(south.regime, DaylightRegime::PolarDay);
        assert_relative_eq!(south.insolation, 559.005, epsilon = 1e-3);

        let annual_max = insolation_over_year(1360.0, -90.0)
            .unwrap()
            .fold(f64::MIN, |a, &b| a.max(b));
        assert_relative_eq!(south.insolation, annual_max, max_relative = 0.01);
    }

    #[test]
    fn test_invalid_date_string() {
        let result = average_daily_insolation(1360.0, 0.0, &DateSpec::from("October 13th"));
        assert!(matches!(result, Err(RSEBMError::InvalidDateType(_))));
    }

    #[test]
    fn test_day_of_year_roundtrip() {
        for day in 1..=365u32 {
            let date = day_of_year_to_date_string(day, 2025).unwrap();
            assert_eq!(date_to_day_of_year(&date).unwrap(), day, "{}", date);
            assert_eq!(
                DateSpec::from(date.as_str()).day_index().unwrap(),
                DateSpec::from(day).day_index().unwrap()
            );
        }
    }

    #[test]
    fn test_year_scan_is_bounded() {
        let s = 1360.0;
        for lat in [-90.0, -66.5, -23.44, 0.0, 23.44, 47.6061, 66.5, 89.9, 90.0] {
            let year = insolation_over_year(s, lat).unwrap();
            assert_eq!(year.len(), 365);
            for q in year.iter() {
                assert!(q.is_finite(), "lat {} gave {}", lat, q);
                assert!(*q >= -1e-9 && *q <= s, "lat {} gave {}", lat, q);
            }
        }
    }

    #[test]
    fn test_grid_global_mean_is_quarter_irradiance() {
        let grid = insolation_grid(1360.0, 181).unwrap();
        assert_relative_eq!(grid.global_annual_mean(), 340.0, max_relative = 0.005);
    }

    #[test]
    fn test_equator_has_twelve_hours_of_daylight() {
        let model = InsolationModel::default();
        for day in [0.0, 100.0, 171.0, 285.0, 354.0] {
            assert_relative_eq!(
                model.detail(1360.0, 0.0, day).day_length_hours(),
                12.0,
                epsilon = 1e-12
            );
        }
    }
}
