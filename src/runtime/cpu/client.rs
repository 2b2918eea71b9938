//! CPU client: device plus the worker pool kernels dispatch to

use super::device::CpuDevice;
use super::pool::ThreadPool;
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// Operations run on the client's [`ThreadPool`]. Clients made with
/// [`CpuRuntime::default_client`](super::CpuRuntime::default_client) share
/// the process-wide pool; [`CpuClient::with_pool`] injects a specific one.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    pool: Arc<ThreadPool>,
}

impl CpuClient {
    /// Create a CPU client on the global pool
    pub fn new(device: CpuDevice) -> Self {
        Self::with_pool(device, ThreadPool::global())
    }

    /// Create a CPU client dispatching to `pool`
    pub fn with_pool(device: CpuDevice, pool: Arc<ThreadPool>) -> Self {
        Self { device, pool }
    }

    /// Device this client runs on
    pub fn device(&self) -> &CpuDevice {
        &self.device
    }

    /// Worker pool this client submits to
    pub fn pool(&self) -> &Arc<ThreadPool> {
        &self.pool
    }

    /// CPU operations block until complete, nothing to do
    pub fn synchronize(&self) {}
}
