//! CPU kernel implementations
//!
//! Low-level compute kernels for CPU operations, generic over `T: Element`.

pub mod mode;

pub use mode::{mode_kernel, mode_of_instance};
