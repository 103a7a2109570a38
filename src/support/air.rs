//! Physical properties of air at a resolved pressure and temperature.
//!
//! The transport-property correlations (conductivity, viscosity, specific heat)
//! are linear or cubic fits in degrees Celsius, while density and the thermal
//! expansion coefficient follow the ideal gas law in kelvin. Taking the zone
//! temperature as a [`ThermodynamicTemperature`] lets each correlation read the
//! scale it was fitted on.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, TemperatureCoefficient,
        ThermalConductivity, ThermodynamicTemperature,
    },
    dynamic_viscosity::pascal_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_coefficient::per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    atmosphere::constants::GAS_CONSTANT,
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::SpecificGasConstant,
};

/// Air properties for an ambient pressure and a zone temperature.
///
/// ```
/// use aircraft_env::support::air::AirProperties;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::pascal,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let air = AirProperties::new(
///     Pressure::new::<pascal>(101_325.0),
///     ThermodynamicTemperature::new::<degree_celsius>(15.0),
/// )
/// .unwrap();
///
/// let rho = air.density().get::<kilogram_per_cubic_meter>();
/// assert!((rho - 1.225).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    ambient_pressure: Pressure,
    zone_temperature: ThermodynamicTemperature,
}

impl AirProperties {
    /// Creates air properties for the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns an error if the pressure is negative or if the temperature is
    /// not strictly positive in kelvin.
    pub fn new(
        ambient_pressure: Pressure,
        zone_temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        let ambient_pressure = Constrained::<Pressure, NonNegative>::new(ambient_pressure)?;
        StrictlyPositive::new(zone_temperature.get::<kelvin>())?;

        Ok(Self {
            ambient_pressure: ambient_pressure.into_inner(),
            zone_temperature,
        })
    }

    /// Returns the ambient pressure.
    #[must_use]
    pub fn ambient_pressure(&self) -> Pressure {
        self.ambient_pressure
    }

    /// Returns the zone temperature.
    #[must_use]
    pub fn zone_temperature(&self) -> ThermodynamicTemperature {
        self.zone_temperature
    }

    /// Density from the ideal gas law, `ρ = P/(R·T)`.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(GAS_CONSTANT);
        self.ambient_pressure / (r * self.zone_temperature)
    }

    /// Thermal conductivity, `k = 8e-5·T + 0.0236` with `T` in °C.
    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        let t = self.celsius();
        ThermalConductivity::new::<watt_per_meter_kelvin>(8.0e-5 * t + 0.0236)
    }

    /// Dynamic viscosity, `μ = 5e-8·T + 2e-5` with `T` in °C.
    #[must_use]
    pub fn dynamic_viscosity(&self) -> DynamicViscosity {
        let t = self.celsius();
        DynamicViscosity::new::<pascal_second>(5.0e-8 * t + 2.0e-5)
    }

    /// Thermal expansion coefficient of an ideal gas, `β = 1/T` with `T` in K.
    #[must_use]
    pub fn thermal_expansion_coefficient(&self) -> TemperatureCoefficient {
        TemperatureCoefficient::new::<per_kelvin>(1.0 / self.zone_temperature.get::<kelvin>())
    }

    /// Specific heat at constant pressure, cubic fit in °C.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        let t = self.celsius();
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            1.0e-5 * t.powi(3) - 0.0013 * t.powi(2) + 0.0422 * t + 1006.4,
        )
    }

    fn celsius(&self) -> f64 {
        self.zone_temperature.get::<degree_celsius>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::pascal};

    use crate::support::{
        atmosphere::constants::{SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE},
        constraint::ConstraintError,
    };

    fn air(pressure_pa: f64, celsius: f64) -> AirProperties {
        AirProperties::new(
            Pressure::new::<pascal>(pressure_pa),
            ThermodynamicTemperature::new::<degree_celsius>(celsius),
        )
        .expect("test inputs are physical")
    }

    #[test]
    fn sea_level_density() {
        let air = air(SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE);
        assert_relative_eq!(
            air.density().get::<kilogram_per_cubic_meter>(),
            SEA_LEVEL_DENSITY,
            max_relative = 1e-4
        );
    }

    #[test]
    fn correlations_at_freezing() {
        let air = air(SEA_LEVEL_PRESSURE, 0.0);

        assert_relative_eq!(
            air.thermal_conductivity().get::<watt_per_meter_kelvin>(),
            0.0236,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            air.dynamic_viscosity().get::<pascal_second>(),
            2.0e-5,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            air.specific_heat().get::<joule_per_kilogram_kelvin>(),
            1006.4,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            air.thermal_expansion_coefficient().get::<per_kelvin>(),
            1.0 / 273.15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn correlations_at_warm_zone() {
        let air = air(75_000.0, 40.0);

        assert_relative_eq!(
            air.thermal_conductivity().get::<watt_per_meter_kelvin>(),
            8.0e-5 * 40.0 + 0.0236,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            air.specific_heat().get::<joule_per_kilogram_kelvin>(),
            1.0e-5 * 64_000.0 - 0.0013 * 1600.0 + 0.0422 * 40.0 + 1006.4,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            air.density().get::<kilogram_per_cubic_meter>(),
            75_000.0 / (287.04 * 313.15),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let negative_pressure = AirProperties::new(
            Pressure::new::<pascal>(-1.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        );
        assert_eq!(negative_pressure, Err(ConstraintError::Negative));

        let absolute_zero = AirProperties::new(
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<kelvin>(0.0),
        );
        assert_eq!(absolute_zero, Err(ConstraintError::Zero));
    }
}
