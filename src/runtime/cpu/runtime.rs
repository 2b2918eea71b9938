//! CPU runtime entry point

use super::client::CpuClient;
use super::device::CpuDevice;

/// CPU compute runtime
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuRuntime;

impl CpuRuntime {
    /// Backend name
    pub fn name() -> &'static str {
        "cpu"
    }

    /// Client on the process-wide worker pool
    pub fn default_client(device: &CpuDevice) -> CpuClient {
        CpuClient::new(device.clone())
    }

    /// Default device
    pub fn default_device() -> CpuDevice {
        CpuDevice::new()
    }
}
