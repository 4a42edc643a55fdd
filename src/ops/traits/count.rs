//! Counting operations trait.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::Predicate;
use crate::runtime::Runtime;

/// Counting operations
pub trait CountOps<R: Runtime> {
    /// Number of elements equal to `value`
    ///
    /// # Example
    ///
    /// ```
    /// # use sift::prelude::*;
    /// # let device = HostDevice::new();
    /// # let client = HostRuntime::default_client(&device);
    /// let data = [1i32, 1, 0, 0, 1];
    /// assert_eq!(client.count(&data, 0)?, 2);
    /// assert_eq!(client.count(&data, 1)?, 3);
    /// assert_eq!(client.count(&data, 2)?, 0);
    /// # Ok::<(), sift::error::Error>(())
    /// ```
    fn count<T: Element>(&self, data: &[T], value: T) -> Result<usize> {
        let _ = (data, value);
        Err(Error::NotImplemented {
            feature: "CountOps::count",
        })
    }

    /// Number of elements satisfying `pred`
    ///
    /// # Example
    ///
    /// ```
    /// # use sift::prelude::*;
    /// # let device = HostDevice::new();
    /// # let client = HostRuntime::default_client(&device);
    /// let data = [1i32, 6, 1, 9, 2];
    /// assert_eq!(client.count_if(&data, GreaterThan(5))?, 2);
    /// # Ok::<(), sift::error::Error>(())
    /// ```
    fn count_if<T: Element, P: Predicate<T>>(&self, data: &[T], pred: P) -> Result<usize> {
        let _ = (data, pred);
        Err(Error::NotImplemented {
            feature: "CountOps::count_if",
        })
    }
}
