use uom::si::{
    f64::{HeatFluxDensity, Ratio, Velocity},
    heat_flux_density::watt_per_square_meter,
    ratio::percent,
    velocity::meter_per_second,
};

use crate::support::constraint::{ConstraintResult, NonNegative, UnitInterval};

/// Fixed ambient values the radiation and ground correlations are evaluated at.
///
/// The defaults are the fixed values the correlations are evaluated at when
/// nothing else is supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientAssumptions {
    /// Relative humidity, as a fraction of saturation.
    pub relative_humidity: Ratio,

    /// Wind speed over the ground.
    pub wind_speed: Velocity,

    /// Solar constant at the top of the atmosphere.
    pub solar_constant: HeatFluxDensity,
}

impl Default for AmbientAssumptions {
    fn default() -> Self {
        Self {
            relative_humidity: Ratio::new::<percent>(50.0),
            wind_speed: Velocity::new::<meter_per_second>(5.0),
            solar_constant: HeatFluxDensity::new::<watt_per_square_meter>(1367.0),
        }
    }
}

impl AmbientAssumptions {
    /// Checks that humidity lies in `[0, 1]` and that wind speed and solar
    /// constant are non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first constraint violated.
    pub(super) fn validate(self) -> ConstraintResult<Self> {
        UnitInterval::new(self.relative_humidity)?;
        NonNegative::new(self.wind_speed)?;
        NonNegative::new(self.solar_constant)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn defaults_are_valid() {
        assert!(AmbientAssumptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let humid = AmbientAssumptions {
            relative_humidity: Ratio::new::<percent>(110.0),
            ..AmbientAssumptions::default()
        };
        assert_eq!(humid.validate(), Err(ConstraintError::AboveMaximum));

        let backwards_wind = AmbientAssumptions {
            wind_speed: Velocity::new::<meter_per_second>(-1.0),
            ..AmbientAssumptions::default()
        };
        assert_eq!(backwards_wind.validate(), Err(ConstraintError::Negative));
    }
}
