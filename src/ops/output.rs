//! Destinations for the copying algorithm variants.

use crate::error::{Error, Result};

/// Where a copying algorithm writes its retained elements
pub enum Slots<'a, T> {
    /// Contiguous storage; retained elements are written from index 0
    Store(&'a mut [T]),
    /// A sink that drops every element and only advances its position
    Discard(&'a mut usize),
}

/// Destination of `remove_copy` and friends
///
/// Implemented for slices, vectors, tagged buffers and [`Discard`].
pub trait Output<T> {
    /// Expose the destination slots
    fn slots(&mut self) -> Slots<'_, T>;
}

impl<T> Output<T> for [T] {
    fn slots(&mut self) -> Slots<'_, T> {
        Slots::Store(self)
    }
}

impl<T> Output<T> for Vec<T> {
    fn slots(&mut self) -> Slots<'_, T> {
        Slots::Store(self.as_mut_slice())
    }
}

/// Output that accepts any number of elements and keeps none of them
///
/// Copying into a `Discard` is a way to learn how many elements an algorithm
/// would write without allocating storage for them. The position cannot pass
/// `usize::MAX`: a copy that would move it further fails with
/// [`Error::OutputTooSmall`] and leaves it unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Discard {
    position: usize,
}

impl Discard {
    /// A discard output at position 0
    pub fn new() -> Self {
        Self::default()
    }

    /// A discard output at a given position
    pub fn at(position: usize) -> Self {
        Self { position }
    }

    /// Number of elements written so far, plus the starting position
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T> Output<T> for Discard {
    fn slots(&mut self) -> Slots<'_, T> {
        Slots::Discard(&mut self.position)
    }
}

/// Hand `required` output slots to `fill`, or advance a discard sink.
///
/// Returns the output end position. Storage shorter than `required`, or a
/// discard sink too close to `usize::MAX`, is an error and nothing changes.
pub(crate) fn commit<T, O, F>(output: &mut O, required: usize, fill: F) -> Result<usize>
where
    O: Output<T> + ?Sized,
    F: FnOnce(&mut [T]),
{
    match output.slots() {
        Slots::Store(dst) => {
            if dst.len() < required {
                return Err(Error::output_too_small(required, dst.len()));
            }
            fill(&mut dst[..required]);
            Ok(required)
        }
        Slots::Discard(position) => {
            let end = position
                .checked_add(required)
                .ok_or_else(|| Error::output_too_small(required, usize::MAX - *position))?;
            *position = end;
            Ok(end)
        }
    }
}
