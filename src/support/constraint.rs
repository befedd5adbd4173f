//! Type-level numeric constraints with zero runtime cost.
//!
//! Coil geometry and material inputs only make physical sense in a restricted
//! range: a coil must have a positive axial length, a winding radius cannot be
//! negative, and so on. The types in this module carry those restrictions in
//! the type system so they are checked once, at construction.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Both markers also provide an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(0.0762)`).
//!
//! The wrapped value may be a plain number or a [`uom`] quantity:
//!
//! ```
//! use coil_models::support::constraint::{NonNegative, StrictlyPositive};
//! use uom::si::{f64::Length, length::centimeter};
//!
//! let coil_length = StrictlyPositive::new(Length::new::<centimeter>(7.62)).unwrap();
//! let turns = NonNegative::new(56.0).unwrap();
//!
//! assert!(StrictlyPositive::new(Length::new::<centimeter>(0.0)).is_err());
//! # let _ = (coil_length, turns);
//! ```
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use coil_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let turns = Constrained::<_, StrictlyPositive>::new(30.0).unwrap();
/// assert_eq!(turns.into_inner(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Sums constrained values for which addition is valid.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn sums_segment_lengths() {
        let segments = [0.25, 0.5, 0.0, 1.25]
            .map(|m| NonNegative::new(Length::new::<meter>(m)).unwrap());

        let total: Constrained<Length, NonNegative> = segments.into_iter().sum();

        assert_relative_eq!(total.get().get::<meter>(), 2.0);
    }

    #[test]
    fn get_matches_as_ref() {
        let radius = StrictlyPositive::new(Length::new::<meter>(0.1)).unwrap();
        assert_eq!(radius.get(), *radius.as_ref());
    }
}
