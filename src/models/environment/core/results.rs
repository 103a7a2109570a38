use uom::si::f64::{HeatFluxDensity, Pressure, TemperatureInterval, ThermodynamicTemperature};

use super::Regime;

/// Every derived quantity of an operating condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Envelope table that was applied.
    pub regime: Regime,

    /// ISA temperature at the condition's altitude.
    pub isa_temperature: ThermodynamicTemperature,

    /// ISA static pressure at the condition's altitude.
    pub pressure: Pressure,

    /// Ambient static temperature from the envelope.
    pub static_temperature: ThermodynamicTemperature,

    /// Static temperature minus ISA temperature.
    pub isa_deviation: TemperatureInterval,

    /// Stagnation temperature at the condition's Mach number.
    pub total_temperature: ThermodynamicTemperature,

    /// Incident solar heat flux.
    pub solar_load: HeatFluxDensity,

    /// Long-wave sky radiation.
    pub sky_radiation: HeatFluxDensity,

    /// Ground surface temperature, if the condition has a time of day.
    pub ground_temperature: Option<ThermodynamicTemperature>,
}
