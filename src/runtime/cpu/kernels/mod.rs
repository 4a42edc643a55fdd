//! CPU kernels for counting and compaction.
//!
//! Kernels take the client for its chunk size and thread pool. Every kernel
//! produces the same result as the sequential code in
//! [`impl_generic`](crate::ops::impl_generic), for any configuration.

mod compact;
mod count;

pub use compact::{compact_copy, compact_in_place};
pub use count::count_matching;
