//! Mode (most frequent value) operations for CPU runtime.
//!
//! The input is viewed as `instance_num` instances of `stride` elements (the
//! last axis). Instances are split into `thread_num` contiguous ranges, one
//! `ModeTask` per range is submitted to the client's pool, and the caller
//! blocks on a [`BlockingCounter`] until every range has been written.

use super::super::helpers::{SendPtr, dispatch_dtype};
use super::super::kernels::mode_kernel;
use super::super::splitter::{BalancedSplitter, Range};
use super::super::sync::BlockingCounter;
use super::super::CpuClient;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use std::sync::Arc;

/// Bytes of scratch memory one mode launch needs for an input of `shape`.
///
/// The kernel copies the whole input before reducing it, so this is
/// `numel * dtype.size_in_bytes()`.
pub fn mode_tmp_size_bytes(shape: &[usize], dtype: DType) -> usize {
    shape.iter().product::<usize>() * dtype.size_in_bytes()
}

/// Compute the mode of every last-axis instance of `input`.
///
/// `input` holds `values.len()` instances of `stride` elements. For instance
/// `i`, `values[i]` receives its most frequent value (ties go to the largest
/// value) and `indices[i]` the last position within the instance holding it.
///
/// An empty `input` is a no-op: the outputs are left untouched.
///
/// Calls made from a worker of the client's own pool run inline on that
/// worker instead of waiting on tasks queued behind it.
///
/// # Errors
///
/// - `InvalidArgument` if `stride` is 0 or does not divide `input.len()`
/// - `ShapeMismatch` if an output length differs from `input.len() / stride`
/// - `Internal` if a worker panicked
pub fn mode_into<T: Element>(
    client: &CpuClient,
    input: &[T],
    stride: usize,
    values: &mut [T],
    indices: &mut [i64],
) -> Result<()> {
    mode_into_with_threads(
        client,
        input,
        stride,
        values,
        indices,
        client.pool().worker_count(),
    )
}

/// [`mode_into`] with an explicit partition count.
///
/// `thread_num = min(instance_num, max_threads)`, at least 1. Partitions may
/// outnumber the pool's workers; the surplus waits in the pool queue.
pub fn mode_into_with_threads<T: Element>(
    client: &CpuClient,
    input: &[T],
    stride: usize,
    values: &mut [T],
    indices: &mut [i64],
    max_threads: usize,
) -> Result<()> {
    if input.is_empty() {
        return Ok(());
    }
    let instance_num = check_launch(input.len(), stride, values.len(), indices.len())?;
    let scratch = client.device().copy_to_scratch(input);
    launch(client, scratch, stride, instance_num, values, indices, max_threads)
}

/// Tensor-level mode along the last axis.
///
/// Output shape is the input shape without its last axis (kept as size 1
/// with `keepdim`). Values keep the input dtype; indices are `I64`. An empty
/// input yields zero-filled outputs.
pub fn mode_impl(client: &CpuClient, a: &Tensor, keepdim: bool) -> Result<(Tensor, Tensor)> {
    let dtype = a.dtype();
    let out_shape = a.layout().reduce_last_dim(keepdim);

    if a.numel() == 0 {
        return Ok((
            Tensor::zeros(&out_shape, dtype),
            Tensor::zeros(&out_shape, DType::index()),
        ));
    }

    let (instance_num, stride) = a.layout().instances();

    dispatch_dtype!(dtype, T => {
        let scratch = client
            .device()
            .copy_bytes_to_scratch::<T>(a.storage().as_bytes());
        let mut values = vec![<T as Element>::zero(); instance_num];
        let mut indices = vec![0i64; instance_num];
        launch(
            client,
            scratch,
            stride,
            instance_num,
            &mut values,
            &mut indices,
            client.pool().worker_count(),
        )?;
        Ok((
            Tensor::try_from_slice(&values, &out_shape)?,
            Tensor::try_from_slice(&indices, &out_shape)?,
        ))
    }, "mode")
}

/// Validate buffer lengths and return `instance_num`.
fn check_launch(size: usize, stride: usize, n_values: usize, n_indices: usize) -> Result<usize> {
    if stride == 0 || size % stride != 0 {
        return Err(Error::invalid_argument(
            "stride",
            format!("{stride} does not evenly divide {size} elements"),
        ));
    }
    let instance_num = size / stride;
    if n_values != instance_num {
        return Err(Error::shape_mismatch(&[instance_num], &[n_values]));
    }
    if n_indices != instance_num {
        return Err(Error::shape_mismatch(&[instance_num], &[n_indices]));
    }
    Ok(instance_num)
}

/// One partition of a mode launch.
struct ModeTask<T> {
    range: Range,
    stride: usize,
    scratch: Arc<Vec<T>>,
    values: SendPtr<T>,
    indices: SendPtr<i64>,
}

impl<T: Element> ModeTask<T> {
    /// # Safety
    /// The output pointers must stay valid for the task's range until it
    /// returns, and no other task may own an overlapping range.
    unsafe fn run(self) {
        unsafe {
            mode_kernel(
                &self.scratch,
                self.stride,
                self.range,
                self.values.as_ptr(),
                self.indices.as_ptr(),
            );
        }
    }
}

fn launch<T: Element>(
    client: &CpuClient,
    scratch: Arc<Vec<T>>,
    stride: usize,
    instance_num: usize,
    values: &mut [T],
    indices: &mut [i64],
    max_threads: usize,
) -> Result<()> {
    debug_assert_eq!(scratch.len(), instance_num * stride);
    debug_assert_eq!(values.len(), instance_num);
    debug_assert_eq!(indices.len(), instance_num);

    let pool = client.pool();

    if pool.is_worker_thread() {
        tracing::debug!(instance_num, stride, "mode launched from a pool worker, running inline");
        // SAFETY: exclusive borrows of both outputs, full range, same thread.
        unsafe {
            mode_kernel(
                &scratch,
                stride,
                Range::new(0, instance_num),
                values.as_mut_ptr(),
                indices.as_mut_ptr(),
            );
        }
        return Ok(());
    }

    let thread_num = instance_num.min(max_threads).max(1);
    let splitter = BalancedSplitter::new(instance_num, thread_num);
    let counter = Arc::new(BlockingCounter::new(thread_num));
    let values_ptr = SendPtr(values.as_mut_ptr());
    let indices_ptr = SendPtr(indices.as_mut_ptr());

    tracing::debug!(
        instance_num,
        stride,
        thread_num,
        dtype = %T::DTYPE,
        "dispatching mode"
    );

    for range in splitter.ranges() {
        let task = ModeTask {
            range,
            stride,
            scratch: Arc::clone(&scratch),
            values: values_ptr,
            indices: indices_ptr,
        };
        let done = counter.guard();
        tracing::trace!(begin = range.begin(), end = range.end(), "submitting mode range");
        pool.submit(move || {
            let _done = done;
            // SAFETY: ranges from the splitter are disjoint, and `launch`
            // does not return (ending the output borrows) before `_done` of
            // every task has dropped.
            unsafe { task.run() }
        });
    }
    drop(scratch);

    counter.wait();

    if counter.is_poisoned() {
        return Err(Error::Internal(
            "a mode worker panicked before finishing its range".to_string(),
        ));
    }
    Ok(())
}
