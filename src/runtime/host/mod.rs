//! Host runtime implementation
//!
//! The host runtime runs every algorithm sequentially on the calling thread.
//! It is the reference implementation other systems are checked against.

mod client;
mod device;
mod runtime;

pub use client::HostClient;
pub use device::HostDevice;
pub use runtime::HostRuntime;
