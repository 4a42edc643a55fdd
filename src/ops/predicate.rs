//! Predicates used by the `_if` algorithm variants.
//!
//! Any `Fn(&T) -> bool + Sync` closure is a predicate. The named types below
//! cover the common cases and can be passed around without boxing.

use crate::dtype::Element;

/// A stateless membership decision over values of type `T`
///
/// Predicates must be `Sync`: parallel systems evaluate them from several
/// worker threads at once.
pub trait Predicate<T: ?Sized>: Sync {
    /// Returns true when `value` satisfies the predicate
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Matches values equal to the wrapped one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq + Sync> Predicate<T> for EqualTo<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Matches values different from the wrapped one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotEqualTo<T>(pub T);

impl<T: PartialEq + Sync> Predicate<T> for NotEqualTo<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Matches values strictly greater than the wrapped one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreaterThan<T>(pub T);

impl<T: PartialOrd + Sync> Predicate<T> for GreaterThan<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Matches values strictly less than the wrapped one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LessThan<T>(pub T);

impl<T: PartialOrd + Sync> Predicate<T> for LessThan<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Matches non-zero values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsTrue;

impl<T: Element> Predicate<T> for IsTrue {
    #[inline]
    fn test(&self, value: &T) -> bool {
        value.is_truthy()
    }
}

/// Matches values whose integral part is even
///
/// Integers are tested exactly; floats are truncated toward zero first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsEven;

impl<T: Element> Predicate<T> for IsEven {
    #[inline]
    fn test(&self, value: &T) -> bool {
        value.is_even()
    }
}

/// Negates the wrapped predicate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}
