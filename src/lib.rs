//! # Aircraft Environment
//!
//! Atmospheric and air-property values for aircraft environmental-control
//! analysis.
//!
//! Given a named operating condition (altitude, Mach number, day type, and
//! optionally time of day) the crate derives ISA temperature and pressure, the
//! static and total air temperature from a day-type temperature envelope, solar
//! heat flux, sky radiation, ground temperature, and air physical properties.
//!
//! ## Crate layout
//!
//! - [`models`]: Operating conditions and their [`twine_core::Model`] adapter.
//! - [`support`]: Standard atmosphere, air properties, and supporting utilities.
//!
//! ## Example
//!
//! An aircraft on the ground at a 15000 ft airport on an ISA day, and one
//! cruising at Mach 0.7 and 40000 ft on a hot day:
//!
//! ```
//! use aircraft_env::models::environment::OperatingCondition;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//!
//! let ground = OperatingCondition::parse("Ground_1", "Normal", 15_000.0, 0.0, None)?;
//! let flight = OperatingCondition::parse("Flight_1", "Hot", 40_000.0, 0.7, None)?;
//!
//! let t_ground = ground.total_temperature().get::<degree_celsius>();
//! assert!((t_ground + 14.7).abs() < 1e-9);
//!
//! let t_static = flight.static_temperature().get::<degree_celsius>();
//! assert!((t_static + 46.5).abs() < 1e-9);
//! assert!(flight.total_temperature() > flight.static_temperature());
//! # Ok::<(), aircraft_env::models::environment::EnvironmentError>(())
//! ```
//!
//! Air properties at the resulting conditions:
//!
//! ```
//! use aircraft_env::models::environment::{DayType, OperatingCondition, TimeOfDay};
//! use uom::si::mass_density::kilogram_per_cubic_meter;
//!
//! let ramp = OperatingCondition::new("Ramp", DayType::Hot, 0.0, 0.0, Some(TimeOfDay::Night))?;
//! let air = ramp.air_properties(ramp.total_temperature())?;
//!
//! // ISA + 30 °C at sea level is less dense than the 1.225 kg/m³ reference.
//! assert!(air.density().get::<kilogram_per_cubic_meter>() < 1.225);
//! # Ok::<(), aircraft_env::models::environment::EnvironmentError>(())
//! ```

pub mod models;
pub mod support;
