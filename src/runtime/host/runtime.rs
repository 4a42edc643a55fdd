//! Host runtime implementation

use super::client::HostClient;
use super::device::HostDevice;
use crate::runtime::Runtime;

/// Sequential host runtime
///
/// Works on any platform and never spawns threads.
#[derive(Clone, Debug, Default)]
pub struct HostRuntime;

impl Runtime for HostRuntime {
    type Device = HostDevice;
    type Client = HostClient;

    fn name() -> &'static str {
        "host"
    }

    fn default_device() -> Self::Device {
        HostDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        HostClient::new(*device)
    }
}
