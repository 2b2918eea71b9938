//! Common test utilities
#![allow(dead_code)]

use modekit::dtype::Element;
use modekit::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ThreadPool, ThreadPoolConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Create a CPU client on the global pool
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// Create a CPU client on a private pool with `workers` threads
pub fn create_client_with_workers(workers: usize) -> CpuClient {
    let config = ThreadPoolConfig::default()
        .with_num_threads(workers)
        .with_thread_name_prefix(format!("test-{workers}"));
    let pool = ThreadPool::new(&config).expect("failed to build test pool");
    CpuClient::with_pool(CpuDevice::new(), Arc::new(pool))
}

/// Reference mode by counting, for NaN-free instances.
///
/// Highest count wins; ties go to the largest value; the index is the last
/// position holding the winner.
pub fn naive_mode<T: Element>(instance: &[T]) -> (T, i64) {
    let mut best: Option<(T, usize)> = None;
    for &candidate in instance {
        let count = instance.iter().filter(|&&v| v == candidate).count();
        best = match best {
            None => Some((candidate, count)),
            Some((value, best_count)) => {
                let better = count > best_count
                    || (count == best_count && candidate.total_cmp(&value).is_gt());
                if better {
                    Some((candidate, count))
                } else {
                    Some((value, best_count))
                }
            }
        };
    }
    let (value, _) = best.expect("empty instance");
    let idx = instance
        .iter()
        .rposition(|&v| v == value)
        .expect("mode value must occur");
    (value, idx as i64)
}

/// Random integers in `[0, distinct)` so instances contain repeats
pub fn random_small_ints(n: usize, distinct: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..distinct)).collect()
}
