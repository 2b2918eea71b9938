//! CPU device implementation

use crate::dtype::Element;
use std::sync::Arc;

/// CPU device (there's only one: the host CPU)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuDevice {
    id: usize,
}

impl CpuDevice {
    /// Create a new CPU device
    pub fn new() -> Self {
        Self { id: 0 }
    }

    /// Device index
    pub fn id(&self) -> usize {
        self.id
    }

    /// Device name
    pub fn name(&self) -> String {
        "cpu".to_string()
    }

    /// Copy `src` into freshly allocated kernel-owned scratch memory.
    ///
    /// The scratch holds exactly `src.len() * size_of::<T>()` bytes and is
    /// shared read-only between the tasks of one kernel launch.
    pub fn copy_to_scratch<T: Element>(&self, src: &[T]) -> Arc<Vec<T>> {
        Arc::new(src.to_vec())
    }

    /// Copy raw tensor bytes into typed scratch memory.
    ///
    /// `bytes.len()` must be a multiple of `size_of::<T>()`; the source needs
    /// no particular alignment.
    pub fn copy_bytes_to_scratch<T: Element>(&self, bytes: &[u8]) -> Arc<Vec<T>> {
        let len = bytes.len() / std::mem::size_of::<T>();
        let mut scratch = vec![T::zero(); len];
        bytemuck::cast_slice_mut::<T, u8>(&mut scratch).copy_from_slice(bytes);
        Arc::new(scratch)
    }
}
