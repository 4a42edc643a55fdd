//! CPU implementation of stable removal operations.

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::impl_generic::validate_stencil;
use crate::ops::{EqualTo, Output, Predicate, RemoveOps};
use crate::runtime::cpu::{CpuClient, CpuRuntime, kernels};

/// RemoveOps implementation for CPU runtime.
impl RemoveOps<CpuRuntime> for CpuClient {
    fn remove<T: Element>(&self, data: &mut [T], value: T) -> Result<usize> {
        self.remove_if(data, EqualTo(value))
    }

    fn remove_if<T: Element, P: Predicate<T>>(&self, data: &mut [T], pred: P) -> Result<usize> {
        let discard = |_: usize, v: &T| pred.test(v);
        Ok(kernels::compact_in_place(self, data, &discard))
    }

    fn remove_if_stencil<T: Element, S: Element, P: Predicate<S>>(
        &self,
        data: &mut [T],
        stencil: &[S],
        pred: P,
    ) -> Result<usize> {
        validate_stencil(data.len(), stencil.len())?;
        let discard = |i: usize, _: &T| pred.test(&stencil[i]);
        Ok(kernels::compact_in_place(self, data, &discard))
    }

    fn remove_copy<T: Element, O: Output<T> + ?Sized>(
        &self,
        input: &[T],
        output: &mut O,
        value: T,
    ) -> Result<usize> {
        self.remove_copy_if(input, output, EqualTo(value))
    }

    fn remove_copy_if<T: Element, O: Output<T> + ?Sized, P: Predicate<T>>(
        &self,
        input: &[T],
        output: &mut O,
        pred: P,
    ) -> Result<usize> {
        let discard = |_: usize, v: &T| pred.test(v);
        kernels::compact_copy(self, input, output, &discard)
    }

    fn remove_copy_if_stencil<T: Element, S: Element, O: Output<T> + ?Sized, P: Predicate<S>>(
        &self,
        input: &[T],
        stencil: &[S],
        output: &mut O,
        pred: P,
    ) -> Result<usize> {
        validate_stencil(input.len(), stencil.len())?;
        let discard = |i: usize, _: &T| pred.test(&stencil[i]);
        kernels::compact_copy(self, input, output, &discard)
    }
}
