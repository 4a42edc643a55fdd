//! Stable removal (stream compaction) operations trait.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{Output, Predicate};
use crate::runtime::Runtime;

/// Stable removal operations
///
/// The in-place variants return the new logical length `n`: `data[..n]` holds
/// the retained elements in their original relative order, and the contents
/// of `data[n..]` are unspecified.
///
/// The copying variants leave the input untouched and write the retained
/// elements to the start of `output`, returning the output end position.
/// Storage shorter than the retained count yields [`Error::OutputTooSmall`]
/// and nothing is written.
///
/// Stencil variants decide on `stencil[i]` instead of `data[i]`. The stencil
/// must be at least as long as the data; extra stencil elements are ignored.
pub trait RemoveOps<R: Runtime> {
    /// Remove every element equal to `value`
    ///
    /// # Example
    ///
    /// ```
    /// # use sift::prelude::*;
    /// # let device = HostDevice::new();
    /// # let client = HostRuntime::default_client(&device);
    /// let mut data = [1i32, 2, 1, 3, 2];
    /// let end = client.remove(&mut data, 2)?;
    /// assert_eq!(&data[..end], &[1, 1, 3]);
    /// # Ok::<(), sift::error::Error>(())
    /// ```
    fn remove<T: Element>(&self, data: &mut [T], value: T) -> Result<usize> {
        let _ = (data, value);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove",
        })
    }

    /// Remove every element satisfying `pred`
    fn remove_if<T: Element, P: Predicate<T>>(&self, data: &mut [T], pred: P) -> Result<usize> {
        let _ = (data, pred);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove_if",
        })
    }

    /// Remove every `data[i]` for which `pred(stencil[i])` holds
    ///
    /// # Example
    ///
    /// ```
    /// # use sift::prelude::*;
    /// # let device = HostDevice::new();
    /// # let client = HostRuntime::default_client(&device);
    /// let mut data = [1i32, 2, 1, 3, 2];
    /// let stencil = [0i32, 1, 0, 0, 1];
    /// let end = client.remove_if_stencil(&mut data, &stencil, IsTrue)?;
    /// assert_eq!(&data[..end], &[1, 1, 3]);
    /// # Ok::<(), sift::error::Error>(())
    /// ```
    fn remove_if_stencil<T: Element, S: Element, P: Predicate<S>>(
        &self,
        data: &mut [T],
        stencil: &[S],
        pred: P,
    ) -> Result<usize> {
        let _ = (data, stencil, pred);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove_if_stencil",
        })
    }

    /// Copy every element not equal to `value` into `output`
    ///
    /// # Example
    ///
    /// ```
    /// # use sift::prelude::*;
    /// # let device = HostDevice::new();
    /// # let client = HostRuntime::default_client(&device);
    /// let data = [1i32, 2, 1, 3, 2];
    /// let mut result = vec![0i32; 5];
    /// let end = client.remove_copy(&data, &mut result, 2)?;
    /// assert_eq!(&result[..end], &[1, 1, 3]);
    ///
    /// let mut sink = Discard::new();
    /// client.remove_copy(&data, &mut sink, 2)?;
    /// assert_eq!(sink.position(), 3);
    /// # Ok::<(), sift::error::Error>(())
    /// ```
    fn remove_copy<T: Element, O: Output<T> + ?Sized>(
        &self,
        input: &[T],
        output: &mut O,
        value: T,
    ) -> Result<usize> {
        let _ = (input, output, value);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove_copy",
        })
    }

    /// Copy every element not satisfying `pred` into `output`
    fn remove_copy_if<T: Element, O: Output<T> + ?Sized, P: Predicate<T>>(
        &self,
        input: &[T],
        output: &mut O,
        pred: P,
    ) -> Result<usize> {
        let _ = (input, output, pred);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove_copy_if",
        })
    }

    /// Copy every `input[i]` for which `pred(stencil[i])` fails into `output`
    fn remove_copy_if_stencil<T: Element, S: Element, O: Output<T> + ?Sized, P: Predicate<S>>(
        &self,
        input: &[T],
        stencil: &[S],
        output: &mut O,
        pred: P,
    ) -> Result<usize> {
        let _ = (input, stencil, output, pred);
        Err(Error::NotImplemented {
            feature: "RemoveOps::remove_copy_if_stencil",
        })
    }
}
