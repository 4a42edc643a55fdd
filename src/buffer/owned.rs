//! Owned tagged sequence

use super::{Sequence, SequenceMut, View, ViewMut};
use crate::dtype::Element;
use crate::ops::{Output, Slots};
use crate::runtime::{Device, Runtime};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Owned sequence of elements belonging to system `R`
///
/// Elements live in host memory for every bundled system; the tag decides
/// which system's algorithms run when the buffer is passed to
/// [`crate::algorithm`] functions.
///
/// # Example
///
/// ```ignore
/// use sift::prelude::*;
///
/// let device = CpuDevice::new();
/// let mut data = Buffer::<i32, CpuRuntime>::from_slice(&[1, 2, 1, 3, 2], &device);
/// let end = sift::algorithm::remove(&mut data, 2)?;
/// data.truncate(end);
/// assert_eq!(data.as_slice(), &[1, 1, 3]);
/// ```
pub struct Buffer<T: Element, R: Runtime> {
    data: Vec<T>,
    device: R::Device,
}

impl<T: Element, R: Runtime> Buffer<T, R> {
    /// Create a buffer by copying a slice
    pub fn from_slice(data: &[T], device: &R::Device) -> Self {
        Self::from_vec(data.to_vec(), device)
    }

    /// Create a buffer taking ownership of a vector
    pub fn from_vec(data: Vec<T>, device: &R::Device) -> Self {
        Self {
            data,
            device: device.clone(),
        }
    }

    /// Create a buffer of `len` zeros
    pub fn zeros(len: usize, device: &R::Device) -> Self {
        Self::full(len, T::zero(), device)
    }

    /// Create a buffer of `len` copies of `value`
    pub fn full(len: usize, value: T, device: &R::Device) -> Self {
        Self::from_vec(vec![value; len], device)
    }

    /// The elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Device holding the elements
    pub fn device(&self) -> &R::Device {
        &self.device
    }

    /// Resize to `len` elements, filling new slots with zero
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, T::zero());
    }

    /// Shorten to `len` elements; no effect if already shorter
    ///
    /// Typically called with the logical end returned by a removal.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// First element, if any
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow as a view
    pub fn view(&self) -> View<'_, T, R> {
        View::new(&self.data, self.device.clone())
    }

    /// Borrow as a mutable view
    pub fn view_mut(&mut self) -> ViewMut<'_, T, R> {
        ViewMut::new(&mut self.data, self.device.clone())
    }

    /// Copy the elements to a buffer of another system
    pub fn to_system<R2: Runtime>(&self, device: &R2::Device) -> Buffer<T, R2> {
        Buffer::from_slice(&self.data, device)
    }

    /// Copy the elements into a vector
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Take the elements out of the buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element, R: Runtime> Clone for Buffer<T, R> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            device: self.device.clone(),
        }
    }
}

impl<T: Element, R: Runtime> fmt::Debug for Buffer<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("system", &R::name())
            .field("device", &self.device.name())
            .field("dtype", &T::DTYPE)
            .field("data", &self.data)
            .finish()
    }
}

/// Buffers compare element-wise, across systems.
impl<T: Element, R: Runtime, R2: Runtime> PartialEq<Buffer<T, R2>> for Buffer<T, R> {
    fn eq(&self, other: &Buffer<T, R2>) -> bool {
        self.data == other.data
    }
}

impl<T: Element, R: Runtime> PartialEq<[T]> for Buffer<T, R> {
    fn eq(&self, other: &[T]) -> bool {
        self.data == other
    }
}

impl<T: Element, R: Runtime> PartialEq<Vec<T>> for Buffer<T, R> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.data == other
    }
}

impl<T: Element, R: Runtime> Index<usize> for Buffer<T, R> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Element, R: Runtime> IndexMut<usize> for Buffer<T, R> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Element, R: Runtime> Sequence for Buffer<T, R> {
    type Elem = T;
    type System = R;

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn device(&self) -> &R::Device {
        &self.device
    }
}

impl<T: Element, R: Runtime> SequenceMut for Buffer<T, R> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Element, R: Runtime> Output<T> for Buffer<T, R> {
    fn slots(&mut self) -> Slots<'_, T> {
        Slots::Store(&mut self.data)
    }
}
