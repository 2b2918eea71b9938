//! Operation traits for tensor operations.
//!
//! Implementations live in the backend-specific modules (`cpu/`).

mod statistics;

pub use statistics::StatisticalOps;
