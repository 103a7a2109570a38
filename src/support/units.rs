//! Extensions to [`uom`].
//!
//! Every physical value in this crate is a [`uom`] quantity. This module holds
//! the few pieces [`uom`] does not provide out of the box.
//!
//! ## Temperature differences
//!
//! Envelope offsets and ISA deviations are temperature *intervals*, not
//! absolute temperatures. [`TemperatureDifference::minus`] subtracts two
//! absolute temperatures and returns the interval between them:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use aircraft_env::support::units::TemperatureDifference;
//!
//! let isa = ThermodynamicTemperature::new::<degree_celsius>(-56.5);
//! let hot = ThermodynamicTemperature::new::<degree_celsius>(-46.5);
//! let deviation = hot.minus(isa).get::<temperature_interval::kelvin>();
//! assert!((deviation - 10.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificGasConstant;
pub use temperature_difference::TemperatureDifference;
