//! Storage: host memory with Arc-based sharing

use crate::dtype::{DType, Element};
use std::sync::Arc;

/// Storage for tensor data on the host
///
/// Storage wraps an immutable byte buffer with reference counting, so
/// cloning a tensor never copies its data.
#[derive(Clone)]
pub struct Storage {
    bytes: Arc<[u8]>,
    dtype: DType,
}

impl Storage {
    /// Create storage from a typed slice, copying its bytes
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        Self {
            bytes: Arc::from(bytemuck::cast_slice::<T, u8>(data)),
            dtype: T::DTYPE,
        }
    }

    /// Create zero-filled storage for `len` elements of `dtype`
    pub fn zeros(len: usize, dtype: DType) -> Self {
        Self {
            bytes: Arc::from(vec![0u8; len * dtype.size_in_bytes()]),
            dtype,
        }
    }

    /// Raw bytes of the storage
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }
}
