//! Statistics operations for CPU runtime

mod mode;

pub use mode::{mode_impl, mode_into, mode_into_with_threads, mode_tmp_size_bytes};
