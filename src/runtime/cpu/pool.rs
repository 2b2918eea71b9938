//! Fixed-size worker pool shared by CPU kernels

use super::config::ThreadPoolConfig;
use crate::error::{Error, Result};
use std::sync::{Arc, OnceLock};

static GLOBAL_POOL: OnceLock<Arc<ThreadPool>> = OnceLock::new();

/// Fixed-size pool of background worker threads.
///
/// Work is submitted fire-and-forget with [`submit`](Self::submit); callers
/// that need completion pair it with a
/// [`BlockingCounter`](super::BlockingCounter). Submitted units run in no
/// particular order.
///
/// Kernels receive the pool through [`CpuClient`](super::CpuClient); the
/// process-wide default is [`ThreadPool::global`].
#[derive(Debug)]
pub struct ThreadPool {
    inner: rayon::ThreadPool,
    name_prefix: String,
}

impl ThreadPool {
    /// Build a pool from `config`
    pub fn new(config: &ThreadPoolConfig) -> Result<Self> {
        let num_threads = config.resolved_threads();
        let prefix = config.thread_name_prefix.clone();
        let thread_prefix = prefix.clone();

        let inner = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(move |i| format!("{thread_prefix}-{i}"))
            .panic_handler(|payload| {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(panic = %msg, "worker task panicked");
            })
            .build()
            .map_err(|e| Error::ThreadPool(format!("failed to create thread pool: {e}")))?;

        tracing::info!(
            workers = inner.current_num_threads(),
            prefix = %prefix,
            "thread pool started"
        );

        Ok(Self {
            inner,
            name_prefix: prefix,
        })
    }

    /// Process-wide pool, built on first use from
    /// [`ThreadPoolConfig::from_env`].
    ///
    /// An invalid environment falls back to the default configuration. The
    /// pool lives until the process exits.
    ///
    /// # Panics
    ///
    /// Panics if the configured pool cannot be built and a single-worker
    /// pool cannot be built either.
    pub fn global() -> Arc<ThreadPool> {
        Arc::clone(GLOBAL_POOL.get_or_init(|| {
            let config = ThreadPoolConfig::from_env().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring invalid pool configuration");
                ThreadPoolConfig::default()
            });
            let pool = ThreadPool::new(&config)
                .or_else(|e| {
                    tracing::warn!(error = %e, "retrying with a single worker");
                    ThreadPool::new(&config.with_num_threads(1))
                })
                .unwrap_or_else(|e| panic!("cannot start any worker thread: {e}"));
            Arc::new(pool)
        }))
    }

    /// Queue `work` on one of the workers and return immediately.
    pub fn submit<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.spawn(work);
    }

    /// Number of worker threads
    pub fn worker_count(&self) -> usize {
        self.inner.current_num_threads()
    }

    /// True when called from one of this pool's workers
    pub fn is_worker_thread(&self) -> bool {
        self.inner.current_thread_index().is_some()
    }

    /// Worker thread name prefix
    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}
