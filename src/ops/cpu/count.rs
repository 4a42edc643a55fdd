//! CPU implementation of counting operations.

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{CountOps, EqualTo, Predicate};
use crate::runtime::cpu::{CpuClient, CpuRuntime, kernels};

/// CountOps implementation for CPU runtime.
impl CountOps<CpuRuntime> for CpuClient {
    fn count<T: Element>(&self, data: &[T], value: T) -> Result<usize> {
        Ok(kernels::count_matching(self, data, &EqualTo(value)))
    }

    fn count_if<T: Element, P: Predicate<T>>(&self, data: &[T], pred: P) -> Result<usize> {
        Ok(kernels::count_matching(self, data, &pred))
    }
}
