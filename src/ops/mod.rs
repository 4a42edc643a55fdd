//! Algorithm operations
//!
//! This module defines the algorithm traits and their implementations for
//! counting and stable removal.
//!
//! # Design
//!
//! Algorithms are defined as traits that are implemented by `RuntimeClient`.
//! Calling a trait method on a client is explicit dispatch: the client alone
//! decides which implementation runs, whatever the data.
//!
//! ```text
//! RuntimeClient<R>
//!   ├── implements CountOps<R>
//!   │     └── count, count_if
//!   └── implements RemoveOps<R>
//!         ├── remove, remove_if, remove_if_stencil            (in place)
//!         └── remove_copy, remove_copy_if, remove_copy_if_stencil (copying)
//! ```
//!
//! # Implementing Operations for a New System
//!
//! Every trait method has a default body returning
//! [`Error::NotImplemented`](crate::error::Error::NotImplemented), so a system
//! only overrides what it supports:
//!
//! ```ignore
//! impl CountOps<MyRuntime> for MyClient {
//!     fn count<T: Element>(&self, data: &[T], value: T) -> Result<usize> {
//!         my_backend_count(data, value)
//!     }
//! }
//! impl RemoveOps<MyRuntime> for MyClient {}
//! ```

mod host;
pub mod impl_generic;
mod output;
mod predicate;
pub mod traits;

#[cfg(feature = "cpu")]
mod cpu;

pub use output::{Discard, Output, Slots};
pub(crate) use output::commit;
pub use predicate::{EqualTo, GreaterThan, IsEven, IsTrue, LessThan, Not, NotEqualTo, Predicate};
pub use traits::{CountOps, RemoveOps};
