//! Supporting utilities used by models.
//!
//! - [`atmosphere`]: Simplified ISA temperature and pressure, plus sea-level constants.
//! - [`air`]: Air physical properties at a resolved pressure and temperature.
//! - [`constraint`]: Type-level numeric invariants for model inputs.
//! - [`units`]: Extensions to [`uom`].

pub mod air;
pub mod atmosphere;
pub mod constraint;
pub mod units;
