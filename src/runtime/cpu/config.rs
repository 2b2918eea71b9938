//! Worker pool configuration

use crate::error::{Error, Result};

/// Environment variable overriding the worker count of the global pool
pub const NUM_THREADS_ENV: &str = "MODEKIT_NUM_THREADS";

/// Default prefix for worker thread names
pub const DEFAULT_THREAD_NAME_PREFIX: &str = "modekit-worker";

/// Configuration for a [`ThreadPool`](super::ThreadPool)
///
/// # Example
///
/// ```
/// use modekit::runtime::cpu::ThreadPoolConfig;
///
/// let config = ThreadPoolConfig::default().with_num_threads(4);
/// assert_eq!(config.resolved_threads(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadPoolConfig {
    /// Number of worker threads; 0 means one per available hardware thread
    pub num_threads: usize,
    /// Worker threads are named `<prefix>-<index>`
    pub thread_name_prefix: String,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            num_threads: 0,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }
}

impl ThreadPoolConfig {
    /// Set the number of worker threads (0 = auto)
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the worker thread name prefix
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Worker count after resolving `0` to the available parallelism.
    ///
    /// Always at least 1.
    pub fn resolved_threads(&self) -> usize {
        if self.num_threads > 0 {
            return self.num_threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads [`NUM_THREADS_ENV`]; an unset or empty variable keeps the default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(NUM_THREADS_ENV) {
            Ok(value) => Self::default().with_num_threads_str(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    fn with_num_threads_str(self, value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(self);
        }
        let num_threads = value.parse::<usize>().map_err(|e| {
            Error::invalid_argument(NUM_THREADS_ENV, format!("'{value}' is not a count: {e}"))
        })?;
        Ok(self.with_num_threads(num_threads))
    }
}
