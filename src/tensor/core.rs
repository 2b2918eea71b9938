//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional host tensor
///
/// `Tensor` is an immutable, contiguous, row-major array. It owns its
/// `Storage` through an `Arc`, so clones share the same bytes.
///
/// # Example
///
/// ```
/// use modekit::tensor::Tensor;
///
/// let t = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.to_vec::<i32>(), vec![1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Clone)]
pub struct Tensor {
    storage: Storage,
    layout: Layout,
}

impl Tensor {
    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let layout = Layout::contiguous(shape);
        Self {
            storage: Storage::zeros(layout.elem_count(), dtype),
            layout,
        }
    }

    // ===== Metadata =====

    /// Underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Layout (shape)
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    // ===== Data Access =====

    /// Copy tensor data to a Vec
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Copy tensor data to a Vec (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: T::DTYPE,
            });
        }

        // Allocate with T's alignment, then copy bytes in; the byte storage
        // itself carries no alignment guarantee for f64/i64.
        let mut result = vec![T::zero(); self.numel()];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        bytes.copy_from_slice(self.storage.as_bytes());
        Ok(result)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}
