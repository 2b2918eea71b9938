//! Layout: shape of a contiguous row-major tensor

use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes the shape of a contiguous (row-major) tensor
///
/// The last axis is the instance axis for per-instance reductions: a tensor
/// of shape `[d0, .., dn-1, stride]` is viewed as `d0 * .. * dn-1` instances
/// of `stride` contiguous elements.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
}

impl Layout {
    /// Create a contiguous layout from a shape
    ///
    /// # Example
    /// ```
    /// use modekit::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.elem_count(), 24);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        Self {
            shape: shape.iter().copied().collect(),
        }
    }

    /// Shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Length of the last axis (1 for scalars)
    #[inline]
    pub fn last_dim(&self) -> usize {
        self.shape.last().copied().unwrap_or(1)
    }

    /// Split into `(instance_num, stride)` along the last axis.
    ///
    /// Returns `(0, stride)` when the tensor is empty, so callers never
    /// divide by a zero stride.
    pub fn instances(&self) -> (usize, usize) {
        let stride = self.last_dim();
        let size = self.elem_count();
        if size == 0 {
            return (0, stride);
        }
        (size / stride, stride)
    }

    /// Shape left after reducing the last axis.
    ///
    /// With `keepdim` the last axis is kept with size 1. Scalars reduce to a
    /// scalar either way.
    pub fn reduce_last_dim(&self, keepdim: bool) -> Shape {
        let mut out = self.shape.clone();
        if out.is_empty() {
            return out;
        }
        if keepdim {
            if let Some(last) = out.last_mut() {
                *last = 1;
            }
        } else {
            out.pop();
        }
        out
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout").field("shape", &self.shape()).finish()
    }
}
