//! Runtime backends ("systems") for sift algorithms
//!
//! This module defines the `Runtime` trait and provides implementations
//! for the bundled systems (sequential host, parallel CPU).
//!
//! # Architecture
//!
//! ```text
//! Runtime (system identity, doubles as the dispatch tag)
//! ├── Device (identifies a specific compute unit)
//! └── Client (executes algorithms: CountOps, RemoveOps)
//! ```
//!
//! A runtime type is carried by every tagged sequence ([`Buffer`](crate::buffer::Buffer),
//! [`View`](crate::buffer::View), ...). The free functions in [`crate::algorithm`]
//! resolve the client from that tag, which is how implicit dispatch works.
//! Calling a method on a client directly is explicit dispatch.

pub mod host;

#[cfg(feature = "cpu")]
pub mod cpu;

mod parallelism;

pub use parallelism::{DEFAULT_CHUNK_SIZE, ParallelismConfig};

/// Core trait for compute backends
///
/// `Runtime` abstracts over different systems. It uses static dispatch via
/// generics: the runtime type is a zero-sized tag, and algorithms are resolved
/// at compile time from the tag a sequence carries.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit
/// - `Client`: Executes algorithms on that device
///
/// # Example
///
/// ```ignore
/// use sift::runtime::{Runtime, host::HostRuntime};
///
/// fn client_for<R: Runtime>() -> R::Client {
///     R::default_client(&R::default_device())
/// }
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: Device;

    /// Client for executing algorithms
    type Client: RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device
    fn id(&self) -> usize;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable name
    fn name(&self) -> String {
        format!("Device({})", self.id())
    }
}

/// Trait for runtime clients that execute algorithms
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    fn synchronize(&self);
}
