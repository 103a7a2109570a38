//! Simplified International Standard Atmosphere (ISA).
//!
//! Temperature falls linearly by 1.98 °C per 1000 ft up to 36000 ft and is held
//! at −56.5 °C above. The switch is a hard step at 36000 ft rather than the
//! true lapse-rate/isothermal transition, matching the envelope tables built
//! on top of it.
//!
//! Pressure uses the barometric formula `P = P_SL·(1 − L·h/T)^5.255`, with `T`
//! the ISA temperature at the altitude itself.
//!
//! Altitudes are plain `f64` feet. The envelope band thresholds are exact
//! foot values, and a round trip through [`uom::si::f64::Length`] would move
//! them by an ulp.

pub mod constants;
mod error;

pub use error::AtmosphereError;

use log::debug;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use constants::{
    BAROMETRIC_EXPONENT, FEET_PER_METER, LAPSE_RATE_PER_KFT, LAPSE_RATE_PER_METER,
    SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, TROPOPAUSE_ALTITUDE, TROPOPAUSE_TEMPERATURE,
};

/// Returns the ISA temperature at `altitude_ft`.
///
/// ```
/// use aircraft_env::support::atmosphere::isa_temperature;
/// use uom::si::thermodynamic_temperature::degree_celsius;
///
/// let t = isa_temperature(40_000.0);
/// assert!((t.get::<degree_celsius>() + 56.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn isa_temperature(altitude_ft: f64) -> ThermodynamicTemperature {
    let celsius = if altitude_ft <= TROPOPAUSE_ALTITUDE {
        SEA_LEVEL_TEMPERATURE - LAPSE_RATE_PER_KFT * altitude_ft / 1000.0
    } else {
        TROPOPAUSE_TEMPERATURE
    };
    ThermodynamicTemperature::new::<degree_celsius>(celsius)
}

/// Returns the ISA static pressure at `altitude_ft`.
///
/// # Errors
///
/// Returns [`AtmosphereError::OutOfDomain`] if the ISA temperature is not
/// positive in kelvin, or if the bracketed term of the barometric formula is
/// zero, negative, or not finite. With the ISA profile above, the latter
/// happens above roughly 109,350 ft.
pub fn pressure(altitude_ft: f64) -> Result<Pressure, AtmosphereError> {
    let altitude_m = altitude_ft / FEET_PER_METER;
    let t_isa = isa_temperature(altitude_ft).get::<kelvin>();

    if StrictlyPositive::check(&t_isa).is_err() {
        debug!("ISA temperature {t_isa} K at {altitude_ft} ft is not positive");
        return Err(AtmosphereError::OutOfDomain {
            context: format!("ISA temperature {t_isa} K at {altitude_ft} ft"),
        });
    }

    let base = 1.0 - LAPSE_RATE_PER_METER * altitude_m / t_isa;
    if !base.is_finite() || base <= 0.0 {
        debug!("barometric base {base} at {altitude_ft} ft is outside (0, 1]");
        return Err(AtmosphereError::OutOfDomain {
            context: format!("barometric base {base} at {altitude_ft} ft"),
        });
    }

    Ok(Pressure::new::<pascal>(
        SEA_LEVEL_PRESSURE * base.powf(BAROMETRIC_EXPONENT),
    ))
}
