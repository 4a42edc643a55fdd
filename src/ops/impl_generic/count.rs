//! Sequential counting.

use crate::ops::Predicate;

/// Number of elements of `data` satisfying `pred`
#[inline]
pub fn count_matching<T, P: Predicate<T>>(data: &[T], pred: &P) -> usize {
    data.iter().filter(|v| pred.test(v)).count()
}
