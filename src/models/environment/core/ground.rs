//! Empirical ground surface temperature.
//!
//! Separate day and night regressions in air temperature `T` (°C), solar load
//! `Q` (W/m²), wind speed `v` (m/s) and relative humidity `RH` (%):
//!
//! - day: `0.3 + 1.02·T + 0.0211·Q − 0.396·v − 0.0283·RH + (4.09E10−5)·v·Q`
//! - night: `−1.2 + 0.97·T + 0.0016·Q − 0.154·v + 0.0118·RH`
//!
//! The coefficients are placeholders with no cited source, and the grouping of
//! the last day term as `(4.09E10−5)·v·Q` is an assumption. Read as plain
//! arithmetic, `4.09E10-5*v*Q` would instead be `4.09e10 − 5·v·Q`. Both stand
//! until the owner of the correlation confirms them.

use uom::si::{
    f64::{HeatFluxDensity, Ratio, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use super::TimeOfDay;

/// Wind–solar coefficient of the day regression, given as `4.09E10-5`.
///
/// Held as the single value `4.09e10 − 5` multiplying `v·Q`. Neither the
/// grouping nor the value (plausibly `4.09e-5`) is confirmed. Changing it
/// changes every day-time ground temperature.
pub(crate) const DAY_WIND_SOLAR: f64 = 4.09E10 - 5.0;

/// Inputs shared by both regressions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GroundInputs {
    pub(crate) air: ThermodynamicTemperature,
    pub(crate) solar_load: HeatFluxDensity,
    pub(crate) wind_speed: Velocity,
    pub(crate) relative_humidity: Ratio,
}

/// Ground surface temperature for the given time of day.
pub(crate) fn ground_temperature(time: TimeOfDay, inputs: GroundInputs) -> ThermodynamicTemperature {
    let t = inputs.air.get::<degree_celsius>();
    let q = inputs.solar_load.get::<watt_per_square_meter>();
    let v = inputs.wind_speed.get::<meter_per_second>();
    let rh = inputs.relative_humidity.get::<percent>();

    let celsius = match time {
        TimeOfDay::Day => {
            0.3 + 1.02 * t + 0.0211 * q - 0.396 * v - 0.0283 * rh + DAY_WIND_SOLAR * v * q
        }
        TimeOfDay::Night => -1.2 + 0.97 * t + 0.0016 * q - 0.154 * v + 0.0118 * rh,
    };

    ThermodynamicTemperature::new::<degree_celsius>(celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn inputs(air_celsius: f64, solar: f64) -> GroundInputs {
        GroundInputs {
            air: ThermodynamicTemperature::new::<degree_celsius>(air_celsius),
            solar_load: HeatFluxDensity::new::<watt_per_square_meter>(solar),
            wind_speed: Velocity::new::<meter_per_second>(5.0),
            relative_humidity: Ratio::new::<percent>(50.0),
        }
    }

    #[test]
    fn night_regression() {
        let q = 0.77 * 1367.0;
        let expected = -1.2 + 0.97 * 15.0 + 0.0016 * q - 0.154 * 5.0 + 0.0118 * 50.0;

        let actual = ground_temperature(TimeOfDay::Night, inputs(15.0, q));
        assert_relative_eq!(
            actual.get::<degree_celsius>(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn day_output_pinned_with_literal_wind_solar_coefficient() {
        assert_eq!(DAY_WIND_SOLAR, 40_899_999_995.0);

        let q = 0.77 * 1367.0;
        let expected = 0.3 + 1.02 * 15.0 + 0.0211 * q - 0.396 * 5.0 - 0.0283 * 50.0
            + 40_899_999_995.0 * 5.0 * q;

        let actual = ground_temperature(TimeOfDay::Day, inputs(15.0, q)).get::<degree_celsius>();
        assert_relative_eq!(actual, expected, max_relative = 1e-12);
        assert_relative_eq!(actual, 2.152_546_549_737e14, max_relative = 1e-9);
    }

    #[test]
    fn night_is_insensitive_to_the_day_coefficient() {
        let dark = ground_temperature(TimeOfDay::Night, inputs(-10.0, 0.0));
        let lit = ground_temperature(TimeOfDay::Night, inputs(-10.0, 1000.0));
        assert_relative_eq!(
            lit.get::<degree_celsius>() - dark.get::<degree_celsius>(),
            1.6,
            epsilon = 1e-9
        );
    }
}
