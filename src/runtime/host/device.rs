//! Host device

use crate::runtime::Device;

/// The calling thread
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostDevice;

impl HostDevice {
    /// The host device
    pub const fn new() -> Self {
        HostDevice
    }
}

impl Device for HostDevice {
    fn id(&self) -> usize {
        0
    }

    fn name(&self) -> String {
        String::from("host")
    }
}
