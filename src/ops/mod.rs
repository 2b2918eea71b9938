//! Tensor operations
//!
//! Operations are defined as traits implemented by runtime clients, so an
//! operation has access to the client's device and worker pool.
//!
//! ```text
//! CpuClient
//!   └── implements StatisticalOps
//!         └── mode (most frequent value along the last axis)
//! ```

mod cpu;
mod traits;

pub use traits::StatisticalOps;
