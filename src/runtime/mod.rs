//! Runtime backends for tensor computation
//!
//! modekit ships a single backend: the host CPU, driven by a shared worker
//! pool.
//!
//! ```text
//! CpuRuntime
//! ├── CpuDevice   (host memory, scratch copies)
//! └── CpuClient   (dispatches operations to a ThreadPool)
//! ```

pub mod cpu;
