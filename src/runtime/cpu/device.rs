//! CPU device

use crate::runtime::Device;

/// The machine's cores, addressed as a single device
///
/// Worker threads come from the client's pool, not from the device, so every
/// `CpuDevice` is interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuDevice;

impl CpuDevice {
    /// The CPU device
    pub const fn new() -> Self {
        CpuDevice
    }
}

impl Device for CpuDevice {
    fn id(&self) -> usize {
        0
    }

    fn name(&self) -> String {
        String::from("cpu")
    }
}
