//! Aircraft operating-condition environment.
//!
//! Resolves the ambient conditions an environmental control system sees for a
//! named operating point: ISA temperature and pressure, static temperature from
//! the day-type envelope, total temperature, solar load, sky radiation, and
//! ground temperature.
//!
//! [`OperatingCondition`] is the direct API. [`EnvironmentModel`] adapts it to
//! [`twine_core::Model`], producing an [`Environment`] snapshot per call.

mod core;

pub use self::core::{
    Adjustment, AmbientAssumptions, DayType, Environment, EnvironmentError, OperatingCondition,
    Regime, STEFAN_BOLTZMANN, TimeOfDay,
};

use twine_core::Model;

/// [`Model`] adapter that evaluates an [`OperatingCondition`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentModel;

impl Model for EnvironmentModel {
    type Input = OperatingCondition;
    type Output = Environment;
    type Error = EnvironmentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::pascal, thermodynamic_temperature::degree_celsius};

    #[test]
    fn model_matches_direct_queries() {
        let condition =
            OperatingCondition::parse("Taxi", "Extra-Hot", 0.0, 0.0, Some("day")).unwrap();
        let env = EnvironmentModel.call(&condition).unwrap();

        assert_eq!(env, condition.evaluate().unwrap());
        assert_eq!(env.regime, Regime::Ground);
        assert_eq!(env.pressure.get::<pascal>(), 101_325.0);
        assert_relative_eq!(
            env.static_temperature.get::<degree_celsius>(),
            55.0,
            epsilon = 1e-9
        );
        assert!(env.ground_temperature.is_some());
    }

    #[test]
    fn model_reports_domain_errors() {
        let condition =
            OperatingCondition::new("Edge of space", DayType::Normal, 150_000.0, 4.0, None)
                .unwrap();
        assert!(matches!(
            EnvironmentModel.call(&condition),
            Err(EnvironmentError::Atmosphere(_))
        ));
    }
}
