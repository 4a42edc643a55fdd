//! CPU runtime implementation
//!
//! The CPU runtime spreads algorithms over worker threads with rayon. Work is
//! split into fixed-size chunks (see [`ParallelismConfig`](crate::runtime::ParallelismConfig));
//! inputs that fit in one chunk run the sequential kernels directly.
//!
//! # Compaction
//!
//! Removal is a two-level stable compaction:
//!
//! ```text
//! copying:   count kept per chunk ─► exclusive scan ─► scatter chunks into disjoint windows
//! in place:  compact each chunk    ─► move compacted prefixes left in chunk order
//! ```
//!
//! Without the `rayon` feature every kernel runs sequentially.

mod client;
mod device;
pub(crate) mod kernels;
mod runtime;

pub use client::CpuClient;
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
