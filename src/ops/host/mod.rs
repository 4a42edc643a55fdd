//! Host (sequential reference) implementation of sift algorithms.

pub mod count;
pub mod remove;
