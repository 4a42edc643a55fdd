//! CPU runtime implementation

use super::client::CpuClient;
use super::device::CpuDevice;
use crate::runtime::Runtime;

/// Multi-threaded CPU runtime
///
/// This is the default parallel system. Its default client runs on the global
/// rayon pool with [`DEFAULT_CHUNK_SIZE`](crate::runtime::DEFAULT_CHUNK_SIZE).
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;

    fn name() -> &'static str {
        "cpu"
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        CpuClient::new(*device)
    }
}
