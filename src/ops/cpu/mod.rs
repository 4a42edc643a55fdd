//! CPU implementation of sift algorithms.
//!
//! Thin trait wrappers over the kernels in `runtime::cpu::kernels`.

pub mod count;
pub mod remove;
