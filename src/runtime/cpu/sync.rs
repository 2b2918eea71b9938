//! Countdown barrier for joining fire-and-forget pool work

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Countdown latch: workers call [`decrease`](Self::decrease) once each, and
/// [`wait`](Self::wait) blocks until the count reaches zero.
///
/// A counter created with zero is already complete.
#[derive(Debug)]
pub struct BlockingCounter {
    count: Mutex<usize>,
    zero: Condvar,
    poisoned: AtomicBool,
}

impl BlockingCounter {
    /// Create a counter expecting `count` decrements
    pub fn new(count: usize) -> Self {
        Self {
            count: Mutex::new(count),
            zero: Condvar::new(),
            poisoned: AtomicBool::new(false),
        }
    }

    /// Record one finished worker.
    ///
    /// Each worker calls this exactly once; extra calls are a contract violation.
    pub fn decrease(&self) {
        let mut count = self.count.lock();
        debug_assert!(*count > 0, "BlockingCounter decreased below zero");
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.zero.notify_all();
        }
    }

    /// Block until the count reaches zero. No timeout.
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.zero.wait(&mut count);
        }
    }

    /// Current count
    pub fn count(&self) -> usize {
        *self.count.lock()
    }

    /// True if a worker holding a [`CountdownGuard`] panicked
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.load(Ordering::Acquire)
    }

    /// Guard that decreases the counter when dropped, including on unwind
    pub fn guard(self: &Arc<Self>) -> CountdownGuard {
        CountdownGuard {
            counter: Arc::clone(self),
        }
    }
}

/// Decreases its [`BlockingCounter`] on drop
#[derive(Debug)]
pub struct CountdownGuard {
    counter: Arc<BlockingCounter>,
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.counter.poisoned.store(true, Ordering::Release);
        }
        self.counter.decrease();
    }
}
