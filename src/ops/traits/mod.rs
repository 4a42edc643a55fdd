//! Operation traits for sift algorithms.
//!
//! This module contains trait definitions for the algorithm families.
//! Implementations are in the backend-specific modules (host/, cpu/).

mod count;
mod remove;

pub use count::CountOps;
pub use remove::RemoveOps;
