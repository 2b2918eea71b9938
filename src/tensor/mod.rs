//! Tensor types
//!
//! This module provides the host `Tensor` type consumed and produced by
//! modekit operations: a contiguous n-dimensional array with a runtime dtype.

mod core;
mod layout;
mod storage;

pub use self::core::Tensor;
pub use layout::{Layout, Shape};
pub use storage::Storage;
