//! # modekit
//!
//! **Parallel mode (most frequent value) reduction for CPU tensors.**
//!
//! A tensor of shape `[d0, .., dn-1, stride]` is treated as `d0 * .. * dn-1`
//! independent instances of `stride` elements. For every instance modekit
//! reports the most frequent value and the position of one occurrence of it.
//! Instances are split into contiguous ranges that run on a shared worker
//! pool; the calling thread blocks until all ranges are done.
//!
//! ## Tie-breaking
//!
//! - Among values with equal frequency, the **largest** wins.
//! - The reported position is the **last** index in the instance holding the
//!   winning value.
//!
//! ## Quick Start
//!
//! ```rust
//! use modekit::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let a = Tensor::from_slice(&[3.0f32, 1.0, 4.0, 1.0, 5.0, 1.0], &[6]);
//! let (values, indices) = client.mode(&a, false)?;
//! assert_eq!(values.to_vec::<f32>(), vec![1.0]);
//! assert_eq!(indices.to_vec::<i64>(), vec![5]);
//! # Ok::<(), modekit::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element kinds (F16, BF16)
//!
//! ## Configuration
//!
//! The process-wide pool reads `MODEKIT_NUM_THREADS` on first use. Build a
//! [`ThreadPool`](runtime::cpu::ThreadPool) explicitly and pass it to
//! [`CpuClient::with_pool`](runtime::cpu::CpuClient::with_pool) to control
//! it directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::StatisticalOps;
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ThreadPool, ThreadPoolConfig};
    pub use crate::tensor::{Layout, Tensor};
}
