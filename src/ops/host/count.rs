//! Host implementation of counting operations.

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::impl_generic::count_matching;
use crate::ops::{CountOps, EqualTo, Predicate};
use crate::runtime::host::{HostClient, HostRuntime};

/// CountOps implementation for the host runtime.
impl CountOps<HostRuntime> for HostClient {
    fn count<T: Element>(&self, data: &[T], value: T) -> Result<usize> {
        Ok(count_matching(data, &EqualTo(value)))
    }

    fn count_if<T: Element, P: Predicate<T>>(&self, data: &[T], pred: P) -> Result<usize> {
        Ok(count_matching(data, &pred))
    }
}
