//! CPU runtime implementation
//!
//! Kernels run on a fixed-size [`ThreadPool`] owned by the [`CpuClient`].
//! A launch statically splits its work into contiguous ranges with
//! [`BalancedSplitter`], submits one task per range, and blocks on a
//! [`BlockingCounter`] until all of them finish.

mod client;
mod config;
mod device;
pub(crate) mod helpers;
pub mod kernels;
mod pool;
mod runtime;
mod splitter;
pub(crate) mod statistics;
mod sync;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
pub use config::{DEFAULT_THREAD_NAME_PREFIX, NUM_THREADS_ENV, ThreadPoolConfig};
pub use device::CpuDevice;
pub use pool::ThreadPool;
pub use runtime::CpuRuntime;
pub use splitter::{BalancedSplitter, Range};
pub use statistics::{mode_into, mode_into_with_threads, mode_tmp_size_bytes};
pub use sync::{BlockingCounter, CountdownGuard};
