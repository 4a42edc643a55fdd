//! Borrowed tagged sequences and retagging

use super::{Sequence, SequenceMut};
use crate::dtype::Element;
use crate::ops::{Output, Slots};
use crate::runtime::Runtime;

/// Borrowed sequence belonging to system `R`
pub struct View<'a, T: Element, R: Runtime> {
    data: &'a [T],
    device: R::Device,
}

impl<'a, T: Element, R: Runtime> View<'a, T, R> {
    /// Tag a slice with system `R` and one of its devices
    pub fn new(data: &'a [T], device: R::Device) -> Self {
        Self { data, device }
    }

    /// The elements, for the lifetime of the borrow
    pub fn elements(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Element, R: Runtime> Clone for View<'_, T, R> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            device: self.device.clone(),
        }
    }
}

impl<T: Element, R: Runtime> Sequence for View<'_, T, R> {
    type Elem = T;
    type System = R;

    fn as_slice(&self) -> &[T] {
        self.data
    }

    fn device(&self) -> &R::Device {
        &self.device
    }
}

/// Mutably borrowed sequence belonging to system `R`
pub struct ViewMut<'a, T: Element, R: Runtime> {
    data: &'a mut [T],
    device: R::Device,
}

impl<'a, T: Element, R: Runtime> ViewMut<'a, T, R> {
    /// Tag a mutable slice with system `R` and one of its devices
    pub fn new(data: &'a mut [T], device: R::Device) -> Self {
        Self { data, device }
    }
}

impl<T: Element, R: Runtime> Sequence for ViewMut<'_, T, R> {
    type Elem = T;
    type System = R;

    fn as_slice(&self) -> &[T] {
        &*self.data
    }

    fn device(&self) -> &R::Device {
        &self.device
    }
}

impl<T: Element, R: Runtime> SequenceMut for ViewMut<'_, T, R> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T: Element, R: Runtime> Output<T> for ViewMut<'_, T, R> {
    fn slots(&mut self) -> Slots<'_, T> {
        Slots::Store(&mut *self.data)
    }
}

/// View the elements of `seq` as belonging to system `R2`
///
/// The view lives on `R2`'s default device. Passing it to a
/// [`crate::algorithm`] function runs `R2`'s implementation.
///
/// ```ignore
/// let data = Buffer::<i32, CpuRuntime>::from_slice(&[1, 2, 3], &device);
/// // runs the host (sequential) count on the CPU buffer's memory
/// let n = sift::algorithm::count(&retag::<HostRuntime, _>(&data), 2)?;
/// ```
pub fn retag<R2: Runtime, S: Sequence + ?Sized>(seq: &S) -> View<'_, S::Elem, R2> {
    View::new(seq.as_slice(), R2::default_device())
}

/// Mutably view the elements of `seq` as belonging to system `R2`
///
/// Writes through the returned view land in `seq`.
pub fn retag_mut<R2: Runtime, S: SequenceMut + ?Sized>(seq: &mut S) -> ViewMut<'_, S::Elem, R2> {
    ViewMut::new(seq.as_mut_slice(), R2::default_device())
}
