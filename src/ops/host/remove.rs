//! Host implementation of stable removal operations.

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::impl_generic::{compact_copy, compact_in_place, retained_count, validate_stencil};
use crate::ops::{EqualTo, Output, Predicate, RemoveOps, commit};
use crate::runtime::host::{HostClient, HostRuntime};

/// RemoveOps implementation for the host runtime.
impl RemoveOps<HostRuntime> for HostClient {
    fn remove<T: Element>(&self, data: &mut [T], value: T) -> Result<usize> {
        self.remove_if(data, EqualTo(value))
    }

    fn remove_if<T: Element, P: Predicate<T>>(&self, data: &mut [T], pred: P) -> Result<usize> {
        Ok(compact_in_place(data, 0, &|_: usize, v: &T| pred.test(v)))
    }

    fn remove_if_stencil<T: Element, S: Element, P: Predicate<S>>(
        &self,
        data: &mut [T],
        stencil: &[S],
        pred: P,
    ) -> Result<usize> {
        validate_stencil(data.len(), stencil.len())?;
        Ok(compact_in_place(data, 0, &|i: usize, _: &T| {
            pred.test(&stencil[i])
        }))
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
        let retained = retained_count(input, 0, &discard);
        commit(output, retained, |dst| {
            compact_copy(input, 0, dst, &discard);
        })
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
        let retained = retained_count(input, 0, &discard);
        commit(output, retained, |dst| {
            compact_copy(input, 0, dst, &discard);
        })
    }
}
