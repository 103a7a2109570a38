//! Sea-level reference values and gas constants.
//!
//! Values are stored as plain `f64` in the unit named by each constant so they
//! can be used in `const` contexts and in the band thresholds of the envelope.

/// Sea-level static pressure, Pa.
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// Sea-level air density, kg/m³.
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Sea-level ISA temperature, °C.
pub const SEA_LEVEL_TEMPERATURE: f64 = 15.0;

/// Standard gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.80665;

/// Ratio of specific heats for air.
pub const GAMMA: f64 = 1.4;

/// Specific gas constant for dry air, J/kg·K.
pub const GAS_CONSTANT: f64 = 287.04;

/// ISA temperature lapse in the troposphere, °C per 1000 ft.
pub const LAPSE_RATE_PER_KFT: f64 = 1.98;

/// Temperature lapse used by the barometric formula, K/m.
pub const LAPSE_RATE_PER_METER: f64 = 0.0065;

/// Exponent of the barometric formula.
pub const BAROMETRIC_EXPONENT: f64 = 5.255;

/// Altitude above which the ISA temperature is held at the tropopause value, ft.
pub const TROPOPAUSE_ALTITUDE: f64 = 36_000.0;

/// ISA temperature above [`TROPOPAUSE_ALTITUDE`], °C.
pub const TROPOPAUSE_TEMPERATURE: f64 = -56.5;

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.28084;
