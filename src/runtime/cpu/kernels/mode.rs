//! Mode (most frequent value) kernels

use super::super::splitter::Range;
use crate::dtype::Element;

/// Most frequent value of one instance and the position of one occurrence.
///
/// Elements are paired with their positions and stable-sorted by
/// [`Element::total_cmp`]; runs of equal values (`==`) are then scanned once.
/// A run replaces the current best when it is at least as long, and the
/// position recorded for a run is the one paired with its last sorted
/// element. Consequently:
///
/// - frequency ties resolve to the **largest** tied value;
/// - the position is the **last** original index holding that value.
///
/// NaN never equals itself, so every NaN is a run of length 1. A positive NaN
/// sorts last and so wins a tie among runs of length 1; a negative NaN sorts
/// first and loses it.
///
/// `pairs` is scratch reused between calls; its contents are overwritten.
/// `elements` must be non-empty.
///
/// # Example
///
/// ```
/// use modekit::runtime::cpu::kernels::mode_of_instance;
///
/// let mut pairs = Vec::new();
/// assert_eq!(mode_of_instance(&[3, 1, 4, 1, 5, 1], &mut pairs), (1, 5));
/// assert_eq!(mode_of_instance(&[2, 2, 5, 5], &mut pairs), (5, 3));
/// ```
pub fn mode_of_instance<T: Element>(elements: &[T], pairs: &mut Vec<(T, i64)>) -> (T, i64) {
    debug_assert!(!elements.is_empty(), "mode of an empty instance");

    if elements.len() == 1 {
        return (elements[0], 0);
    }

    pairs.clear();
    pairs.extend(elements.iter().enumerate().map(|(i, &v)| (v, i as i64)));
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut mode = pairs[0].0;
    let mut mode_idx = 0i64;
    let mut max_freq = 0usize;
    let mut run = 0usize;

    for (k, &(value, idx)) in pairs.iter().enumerate() {
        run += 1;
        let run_ends = match pairs.get(k + 1) {
            Some(&(next, _)) => value != next,
            None => true,
        };
        if run_ends {
            if run >= max_freq {
                mode = value;
                mode_idx = idx;
                max_freq = run;
            }
            run = 0;
        }
    }

    (mode, mode_idx)
}

/// Compute the mode of every instance in `range`.
///
/// Instance `i` is `scratch[i * stride..(i + 1) * stride]`; its result goes to
/// `values[i]` and `indices[i]`.
///
/// # Safety
/// - `stride >= 1` and `scratch.len() >= range.end() * stride`
/// - `values` and `indices` must be valid for writes at every index in `range`
/// - no other thread may access those output slots concurrently
pub unsafe fn mode_kernel<T: Element>(
    scratch: &[T],
    stride: usize,
    range: Range,
    values: *mut T,
    indices: *mut i64,
) {
    let mut pairs: Vec<(T, i64)> = Vec::with_capacity(stride);

    for i in range {
        let instance = &scratch[i * stride..(i + 1) * stride];
        let (mode, mode_idx) = mode_of_instance(instance, &mut pairs);
        unsafe {
            *values.add(i) = mode;
            *indices.add(i) = mode_idx;
        }
    }
}
