use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a float is finite and zero or greater.
///
/// Altitudes and Mach numbers use this constraint: zero is meaningful for both
/// (sea level, and a stationary aircraft on the ground), while an infinite
/// value would fall through every envelope band.
///
/// # Examples
///
/// ```
/// use aircraft_env::support::constraint::FiniteNonNegative;
///
/// let mach = FiniteNonNegative::new(0.0).unwrap();
/// assert_eq!(mach.into_inner(), 0.0);
///
/// assert!(FiniteNonNegative::new(-0.1).is_err());
/// assert!(FiniteNonNegative::new(f64::INFINITY).is_err());
/// assert!(FiniteNonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiniteNonNegative;

impl FiniteNonNegative {
    /// Constructs a [`Constrained<T, FiniteNonNegative>`] if the value is
    /// finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, infinite, or not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, FiniteNonNegative>, ConstraintError> {
        Constrained::<T, FiniteNonNegative>::new(value)
    }
}

impl<T: Float> Constraint<T> for FiniteNonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value < T::zero() {
            Err(ConstraintError::Negative)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert!(FiniteNonNegative::new(36_000.0).is_ok());
        assert!(FiniteNonNegative::new(0.0).is_ok());
        assert!(FiniteNonNegative::new(-0.0).is_ok());
        assert!(FiniteNonNegative::new(f64::MAX).is_ok());
        assert_eq!(
            FiniteNonNegative::new(-1.0),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            FiniteNonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn infinities() {
        assert_eq!(
            FiniteNonNegative::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
        assert_eq!(
            FiniteNonNegative::new(f64::NEG_INFINITY),
            Err(ConstraintError::Negative)
        );
    }
}
