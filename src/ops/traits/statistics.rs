//! Statistical operations trait for tensor statistics.

use crate::error::Result;
use crate::tensor::Tensor;

/// Statistical operations trait for tensor statistics
pub trait StatisticalOps {
    /// Mode (most frequent value) along the last dimension
    ///
    /// The tensor is viewed as a batch of instances: every axis but the last
    /// is flattened into the instance count, and each instance holds the
    /// elements of the last axis.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `keepdim` - If true, the last dimension is kept with size 1
    ///
    /// # Returns
    ///
    /// Tuple of `(values, indices)`:
    /// - `values`: most frequent value of each instance (same dtype as `a`)
    /// - `indices`: position within the instance of one occurrence (I64)
    ///
    /// # Algorithm
    ///
    /// ```text
    /// For each instance:
    /// 1. Pair elements with their positions, sort by value
    /// 2. Scan runs of equal values
    /// 3. The longest run wins; on a tie the larger value wins
    /// 4. Report the position paired with the winning run's last element
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use modekit::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// use modekit::ops::StatisticalOps;
    ///
    /// let a = Tensor::from_slice(&[1i64, 1, 2, 7, 8, 8], &[2, 3]);
    /// let (values, indices) = client.mode(&a, false)?;
    /// assert_eq!(values.to_vec::<i64>(), vec![1, 8]);
    /// assert_eq!(indices.to_vec::<i64>(), vec![1, 2]);
    /// # Ok::<(), modekit::error::Error>(())
    /// ```
    ///
    /// # Notes
    ///
    /// - Floating point values are grouped with `==`: `-0.0` and `0.0` count
    ///   as one value, and every NaN is distinct
    /// - An empty tensor yields zero-filled outputs
    fn mode(&self, a: &Tensor, keepdim: bool) -> Result<(Tensor, Tensor)>;

    /// Scratch bytes [`mode`](Self::mode) allocates for `a`
    fn mode_scratch_bytes(&self, a: &Tensor) -> usize;
}
