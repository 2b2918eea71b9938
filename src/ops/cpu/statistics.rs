//! CPU implementation of statistical operations.

use crate::error::Result;
use crate::ops::StatisticalOps;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::statistics::{mode_impl, mode_tmp_size_bytes};
use crate::tensor::Tensor;

/// StatisticalOps implementation for CPU runtime.
impl StatisticalOps for CpuClient {
    fn mode(&self, a: &Tensor, keepdim: bool) -> Result<(Tensor, Tensor)> {
        mode_impl(self, a, keepdim)
    }

    fn mode_scratch_bytes(&self, a: &Tensor) -> usize {
        mode_tmp_size_bytes(a.shape(), a.dtype())
    }
}
