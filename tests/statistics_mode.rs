//! Tests for mode operations

mod common;

use common::{create_client_with_workers, create_cpu_client, naive_mode, random_small_ints};
use modekit::dtype::DType;
use modekit::error::Error;
use modekit::ops::StatisticalOps;
use modekit::runtime::cpu::{mode_into, mode_into_with_threads};
use modekit::tensor::Tensor;

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_mode_single_instance() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[3i32, 1, 4, 1, 5, 1], &[6]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert!(values.shape().is_empty());
    assert_eq!(values.to_vec::<i32>(), vec![1]);
    assert_eq!(
        indices.to_vec::<i64>(),
        vec![5],
        "expected the last position of 1"
    );
}

#[test]
fn test_mode_tie_prefers_larger_value() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[2i64, 2, 5, 5], &[4]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert_eq!(values.to_vec::<i64>(), vec![5]);
    assert_eq!(indices.to_vec::<i64>(), vec![3]);
}

#[test]
fn test_mode_batch() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[1.0f32, 1.0, 2.0, 7.0, 8.0, 8.0], &[2, 3]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert_eq!(values.shape(), &[2]);
    assert_eq!(values.dtype(), DType::F32);
    assert_eq!(indices.dtype(), DType::I64);
    assert_eq!(values.to_vec::<f32>(), vec![1.0, 8.0]);
    assert_eq!(indices.to_vec::<i64>(), vec![1, 2]);
}

#[test]
fn test_mode_keepdim() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[1u8, 1, 2, 7, 8, 8], &[2, 3]);
    let (values, indices) = client.mode(&a, true).unwrap();

    assert_eq!(values.shape(), &[2, 1]);
    assert_eq!(indices.shape(), &[2, 1]);
    assert_eq!(values.to_vec::<u8>(), vec![1, 8]);
}

#[test]
fn test_mode_3d_flattens_leading_axes() {
    let (client, _device) = create_cpu_client();

    #[rustfmt::skip]
    let data = [
        0i16, 0, 1,   4, 4, 4,
        9, 8, 7,      -1, -2, -1,
    ];
    let a = Tensor::from_slice(&data, &[2, 2, 3]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert_eq!(values.shape(), &[2, 2]);
    assert_eq!(values.to_vec::<i16>(), vec![0, 4, 9, -1]);
    assert_eq!(indices.to_vec::<i64>(), vec![1, 2, 0, 2]);
}

#[test]
fn test_mode_stride_one() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[5u64, 3, 9, 9], &[4, 1]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert_eq!(values.to_vec::<u64>(), vec![5, 3, 9, 9]);
    assert_eq!(indices.to_vec::<i64>(), vec![0, 0, 0, 0]);
}

#[test]
fn test_mode_scalar() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[-7i8], &[]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert!(values.shape().is_empty());
    assert_eq!(values.to_vec::<i8>(), vec![-7]);
    assert_eq!(indices.to_vec::<i64>(), vec![0]);
}

#[test]
fn test_mode_f64_with_signed_zero_and_nan() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[f64::NAN, -0.0, 0.0, 2.5, f64::NAN], &[5]);
    let (values, indices) = client.mode(&a, false).unwrap();

    let v = values.to_vec::<f64>();
    assert_eq!(v[0], 0.0);
    assert_eq!(indices.to_vec::<i64>(), vec![2]);
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn test_mode_empty_tensor() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice::<f32>(&[], &[3, 0]);
    let (values, indices) = client.mode(&a, false).unwrap();

    assert_eq!(values.shape(), &[3]);
    assert_eq!(values.to_vec::<f32>(), vec![0.0; 3]);
    assert_eq!(indices.to_vec::<i64>(), vec![0; 3]);

    let b = Tensor::from_slice::<i32>(&[], &[0, 4]);
    let (values, indices) = client.mode(&b, true).unwrap();
    assert_eq!(values.shape(), &[0, 1]);
    assert_eq!(indices.numel(), 0);
}

#[test]
fn test_mode_into_empty_leaves_outputs_untouched() {
    let (client, _device) = create_cpu_client();

    let mut values = [42u32; 2];
    let mut indices = [-9i64; 2];
    mode_into::<u32>(&client, &[], 0, &mut values, &mut indices).unwrap();

    assert_eq!(values, [42, 42]);
    assert_eq!(indices, [-9, -9]);
}

// ============================================================================
// Buffer-level entry point
// ============================================================================

#[test]
fn test_mode_into_rejects_bad_lengths() {
    let (client, _device) = create_cpu_client();
    let input = [1i32, 2, 3, 4, 5, 6];

    let mut values = [0i32; 3];
    let mut indices = [0i64; 2];
    let err = mode_into(&client, &input, 3, &mut values, &mut indices).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));

    let mut values = [0i32; 2];
    let err = mode_into(&client, &input, 4, &mut values, &mut indices).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "stride", .. }));

    let err = mode_into(&client, &input, 0, &mut values, &mut indices).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_mode_into_writes_every_slot() {
    let client = create_client_with_workers(3);
    let stride = 5;
    let instance_num = 17;
    let input = random_small_ints(stride * instance_num, 3, 11);

    let mut values = vec![i32::MIN; instance_num];
    let mut indices = vec![-1i64; instance_num];
    mode_into(&client, &input, stride, &mut values, &mut indices).unwrap();

    for (i, instance) in input.chunks(stride).enumerate() {
        assert_eq!((values[i], indices[i]), naive_mode(instance), "instance {i}");
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_mode_matches_reference() {
    let client = create_client_with_workers(4);

    for (seed, stride, distinct) in [(1u64, 1usize, 3i32), (2, 2, 2), (3, 7, 4), (4, 64, 10), (5, 33, 50)] {
        let instance_num = 23;
        let data = random_small_ints(stride * instance_num, distinct, seed);
        let a = Tensor::from_slice(&data, &[instance_num, stride]);
        let (values, indices) = client.mode(&a, false).unwrap();
        let values = values.to_vec::<i32>();
        let indices = indices.to_vec::<i64>();

        for (i, instance) in data.chunks(stride).enumerate() {
            let (expected_value, expected_idx) = naive_mode(instance);
            assert_eq!(values[i], expected_value, "seed {seed} instance {i}");
            assert_eq!(indices[i], expected_idx, "seed {seed} instance {i}");
        }
    }
}

#[test]
fn test_mode_frequency_is_maximal_and_index_points_at_value() {
    let (client, _device) = create_cpu_client();
    let stride = 40;
    let data = random_small_ints(stride * 50, 6, 99);
    let a = Tensor::from_slice(&data, &[5, 10, stride]);
    let (values, indices) = client.mode(&a, false).unwrap();
    let values = values.to_vec::<i32>();
    let indices = indices.to_vec::<i64>();

    for (i, instance) in data.chunks(stride).enumerate() {
        let count = |x: i32| instance.iter().filter(|&&v| v == x).count();
        let mode_count = count(values[i]);
        assert!(instance.iter().all(|&v| count(v) <= mode_count));
        assert_eq!(instance[indices[i] as usize], values[i]);
    }
}

#[test]
fn test_mode_is_idempotent() {
    let (client, _device) = create_cpu_client();
    let data = random_small_ints(12 * 300, 5, 7);
    let a = Tensor::from_slice(&data, &[300, 12]);

    let (v1, i1) = client.mode(&a, false).unwrap();
    let (v2, i2) = client.mode(&a, false).unwrap();

    assert_eq!(v1.to_vec::<i32>(), v2.to_vec::<i32>());
    assert_eq!(i1.to_vec::<i64>(), i2.to_vec::<i64>());
}

#[test]
fn test_mode_partition_invariance() {
    let client = create_client_with_workers(4);
    let stride = 9;
    let instance_num = 101;
    let input = random_small_ints(stride * instance_num, 4, 2024);

    let run = |threads: usize| {
        let mut values = vec![0i32; instance_num];
        let mut indices = vec![0i64; instance_num];
        mode_into_with_threads(&client, &input, stride, &mut values, &mut indices, threads)
            .unwrap();
        (values, indices)
    };

    let sequential = run(1);
    for threads in [2, 3, 4, 16, instance_num, 1000] {
        assert_eq!(run(threads), sequential, "threads = {threads}");
    }
}

#[test]
fn test_mode_concurrent_callers_share_pool() {
    let client = create_client_with_workers(2);
    let data = random_small_ints(8 * 64, 3, 5);
    let a = Tensor::from_slice(&data, &[64, 8]);
    let (expected, _) = client.mode(&a, false).unwrap();
    let expected = expected.to_vec::<i32>();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let (values, _) = client.mode(&a, false).unwrap();
                assert_eq!(values.to_vec::<i32>(), expected);
            });
        }
    });
}

// ============================================================================
// DTypes
// ============================================================================

#[test]
fn test_mode_integer_dtypes() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[200u8, 3, 200, 3, 7], &[5]);
    let (v, i) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<u8>(), vec![200]);
    assert_eq!(i.to_vec::<i64>(), vec![2]);

    let a = Tensor::from_slice(&[-5i8, -5, 100, -128], &[4]);
    let (v, _) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<i8>(), vec![-5]);

    let a = Tensor::from_slice(&[u32::MAX, 0, u32::MAX], &[3]);
    let (v, i) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<u32>(), vec![u32::MAX]);
    assert_eq!(i.to_vec::<i64>(), vec![2]);

    let a = Tensor::from_slice(&[1u16, 2, 3, 4], &[4]);
    let (v, i) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<u16>(), vec![4]);
    assert_eq!(i.to_vec::<i64>(), vec![3]);

    let a = Tensor::from_slice(&[i64::MIN, i64::MIN, 0, 0, 0], &[5]);
    let (v, i) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<i64>(), vec![0]);
    assert_eq!(i.to_vec::<i64>(), vec![4]);
}

#[cfg(not(feature = "f16"))]
#[test]
fn test_mode_half_without_feature_is_unsupported() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::zeros(&[2, 3], DType::F16);
    let err = client.mode(&a, false).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedDType {
            dtype: DType::F16,
            op: "mode"
        }
    ));
}

#[cfg(feature = "f16")]
#[test]
fn test_mode_half() {
    use half::{bf16, f16};
    let (client, _device) = create_cpu_client();

    let data: Vec<f16> = [1.0f32, 2.0, 2.0, 1.0, 3.0]
        .iter()
        .map(|&x| f16::from_f32(x))
        .collect();
    let a = Tensor::from_slice(&data, &[5]);
    let (v, i) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<f16>(), vec![f16::from_f32(2.0)]);
    assert_eq!(i.to_vec::<i64>(), vec![2]);

    let data: Vec<bf16> = [4.0f32, 4.0, 1.0]
        .iter()
        .map(|&x| bf16::from_f32(x))
        .collect();
    let a = Tensor::from_slice(&data, &[3]);
    let (v, _) = client.mode(&a, false).unwrap();
    assert_eq!(v.to_vec::<bf16>(), vec![bf16::from_f32(4.0)]);
}

#[test]
fn test_mode_scratch_bytes() {
    let (client, _device) = create_cpu_client();

    let a = Tensor::from_slice(&[0.0f64; 12], &[3, 4]);
    assert_eq!(client.mode_scratch_bytes(&a), 12 * 8);

    let b = Tensor::from_slice(&[0u8; 6], &[6]);
    assert_eq!(client.mode_scratch_bytes(&b), 6);
}
