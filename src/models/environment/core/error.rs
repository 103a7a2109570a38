use thiserror::Error;

use crate::support::{atmosphere::AtmosphereError, constraint::ConstraintError};

/// Errors that can occur while resolving an operating condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvironmentError {
    /// The day type name is not one of the five envelope bands.
    #[error("invalid day type {name:?}: expected Extra-Hot, Hot, Normal, Cold, or Extra-Cold")]
    InvalidDayType { name: String },

    /// The time of day name is neither `day` nor `night`.
    #[error("invalid time of day {name:?}: expected day or night")]
    InvalidTimeOfDay { name: String },

    /// Ground temperature was requested for a condition without a time of day.
    #[error("ground temperature of {condition:?} requires a time of day")]
    MissingTimeOfDay { condition: String },

    /// The standard atmosphere could not be evaluated at this altitude.
    #[error("standard atmosphere evaluation failed")]
    Atmosphere(#[from] AtmosphereError),

    /// An input violated a numeric constraint.
    #[error("invalid input")]
    Constraint(#[from] ConstraintError),
}
