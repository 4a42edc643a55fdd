//! Tagged sequences
//!
//! This module provides [`Buffer`], an owned sequence tagged with the system
//! (runtime) it belongs to, and the borrowed [`View`] / [`ViewMut`]. The tag is
//! a type parameter: it costs nothing at runtime and selects the algorithm
//! implementation at compile time when a sequence is passed to the functions
//! in [`crate::algorithm`].
//!
//! [`retag`] and [`retag_mut`] reinterpret the same memory under another
//! system's tag, which routes implicit dispatch to that system.

mod owned;
mod view;

pub use owned::Buffer;
pub use view::{View, ViewMut, retag, retag_mut};

use crate::dtype::Element;
use crate::runtime::Runtime;

/// A contiguous sequence tagged with a system
pub trait Sequence {
    /// Element type
    type Elem: Element;

    /// System the sequence belongs to
    type System: Runtime;

    /// The elements
    fn as_slice(&self) -> &[Self::Elem];

    /// Device holding the elements
    fn device(&self) -> &<Self::System as Runtime>::Device;

    /// Number of elements
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A mutable contiguous sequence tagged with a system
pub trait SequenceMut: Sequence {
    /// The elements, mutably
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];
}
