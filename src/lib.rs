//! # sift
//!
//! **Backend-dispatched parallel counting and stable removal for Rust.**
//!
//! sift provides `count`, `count_if`, `remove`, `remove_if`, `remove_copy`,
//! `remove_copy_if` and their stencil variants over contiguous sequences, with
//! the same API across a sequential host system and a multi-threaded CPU
//! system.
//!
//! ## Dispatch
//!
//! - **Explicit**: call an algorithm on a client, and that client runs it.
//! - **Implicit**: pass tagged sequences to [`algorithm`] functions; the
//!   system is resolved at compile time from the sequence's tag.
//!   [`buffer::retag`] changes the tag without copying.
//!
//! Downstream crates can add systems by implementing [`runtime::Runtime`] and
//! the [`ops`] traits; methods they leave out report `NotImplemented`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sift::prelude::*;
//!
//! let device = CpuDevice::new();
//! let mut data = Buffer::<i32, CpuRuntime>::from_slice(&[1, 2, 1, 3, 2], &device);
//!
//! assert_eq!(sift::algorithm::count(&data, 2)?, 2);
//!
//! let end = sift::algorithm::remove(&mut data, 2)?;
//! data.truncate(end);
//! assert_eq!(data.as_slice(), &[1, 1, 3]);
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): parallel CPU system
//! - `rayon` (default): multi-threaded CPU kernels
//! - `f16`: half-precision elements (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod buffer;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::{Buffer, Sequence, SequenceMut, View, ViewMut, retag, retag_mut};
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        CountOps, Discard, EqualTo, GreaterThan, IsEven, IsTrue, LessThan, Not, NotEqualTo,
        Output, Predicate, RemoveOps,
    };
    pub use crate::runtime::host::{HostClient, HostDevice, HostRuntime};
    pub use crate::runtime::{Device, ParallelismConfig, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
}

/// Default parallel runtime based on enabled features
///
/// - With `cpu` feature: `CpuRuntime`
/// - Otherwise: `HostRuntime`
#[cfg(feature = "cpu")]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;

/// Default parallel runtime based on enabled features
#[cfg(not(feature = "cpu"))]
pub type DefaultRuntime = runtime::host::HostRuntime;
