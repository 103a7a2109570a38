//! Solar load and long-wave sky radiation.

use uom::si::{
    f64::{HeatFluxDensity, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    ratio::percent,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

/// Stefan–Boltzmann constant, W/m²·K⁴.
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Fraction of the solar constant reaching `altitude_ft`.
///
/// Three steps: on the ground, up to 10000 ft, and above.
pub(crate) fn solar_transmittance(altitude_ft: f64) -> f64 {
    if altitude_ft == 0.0 {
        0.77
    } else if altitude_ft <= 10_000.0 {
        0.84
    } else {
        0.92
    }
}

/// Incident solar heat flux at `altitude_ft`.
pub(crate) fn solar_load(altitude_ft: f64, solar_constant: HeatFluxDensity) -> HeatFluxDensity {
    solar_constant * solar_transmittance(altitude_ft)
}

/// Dew point from air temperature and relative humidity, °C.
///
/// Linear approximation `T_dp = T − (100 − RH%)/5`.
pub(crate) fn dew_point(air: ThermodynamicTemperature, relative_humidity: Ratio) -> f64 {
    air.get::<degree_celsius>() - (100.0 - relative_humidity.get::<percent>()) / 5.0
}

/// Clear-sky emissivity as a linear function of dew point in °C.
pub(crate) fn sky_emissivity(dew_point_celsius: f64) -> f64 {
    0.741 + 0.0062 * dew_point_celsius
}

/// Long-wave radiation emitted by the sky, `σ·ε·T⁴`.
pub(crate) fn sky_radiation(
    air: ThermodynamicTemperature,
    relative_humidity: Ratio,
) -> HeatFluxDensity {
    let emissivity = sky_emissivity(dew_point(air, relative_humidity));
    let t = air.get::<kelvin>();
    HeatFluxDensity::new::<watt_per_square_meter>(STEFAN_BOLTZMANN * emissivity * t.powi(4))
}
