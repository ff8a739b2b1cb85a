//! Polling condition helper
//!
//! [`Condition`] re-evaluates a boolean supplier on a fixed sleep interval
//! until it yields the wanted value. The wait is a plain spin-sleep on the
//! calling thread, not a synchronization primitive; the bounded `*_for`
//! variants give up at a deadline and report whether the value was seen.

use std::thread;
use std::time::{Duration, Instant};

/// Interval between supplier evaluations unless overridden
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Blocks the calling thread until a supplier yields a wanted value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    poll_interval: Duration,
}

impl Condition {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Block until `supplier` yields `true`
    pub fn wait_till_true(&self, supplier: impl Fn() -> bool) {
        self.wait_till(supplier, true);
    }

    /// Block until `supplier` yields `false`
    pub fn wait_till_false(&self, supplier: impl Fn() -> bool) {
        self.wait_till(supplier, false);
    }

    /// Block until `supplier` yields `true` or `timeout` elapses
    ///
    /// Returns whether the wanted value was observed before the deadline.
    pub fn wait_till_true_for(&self, supplier: impl Fn() -> bool, timeout: Duration) -> bool {
        self.wait_till_for(supplier, true, timeout)
    }

    /// Block until `supplier` yields `false` or `timeout` elapses
    pub fn wait_till_false_for(&self, supplier: impl Fn() -> bool, timeout: Duration) -> bool {
        self.wait_till_for(supplier, false, timeout)
    }

    fn wait_till(&self, supplier: impl Fn() -> bool, wanted: bool) {
        while supplier() != wanted {
            thread::sleep(self.poll_interval);
        }
    }

    fn wait_till_for(
        &self,
        supplier: impl Fn() -> bool,
        wanted: bool,
        timeout: Duration,
    ) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if supplier() == wanted {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                tracing::trace!(?timeout, wanted, "condition wait timed out");
                return false;
            }
            thread::sleep(self.poll_interval.min(deadline - now));
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn fast() -> Condition {
        Condition::with_poll_interval(Duration::from_millis(1))
    }

    #[test]
    fn test_wait_till_true_returns_once_flag_flips() {
        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            flag_clone.store(true, Ordering::SeqCst);
        });

        fast().wait_till_true(|| flag.load(Ordering::SeqCst));
        assert!(flag.load(Ordering::SeqCst));
        handle.join().unwrap();
    }

    #[test]
    fn test_wait_till_false() {
        let flag = Arc::new(AtomicBool::new(true));
        let flag_clone = flag.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            flag_clone.store(false, Ordering::SeqCst);
        });

        fast().wait_till_false(|| flag.load(Ordering::SeqCst));
        assert!(!flag.load(Ordering::SeqCst));
        handle.join().unwrap();
    }

    #[test]
    fn test_bounded_wait_times_out() {
        let observed = fast().wait_till_true_for(|| false, Duration::from_millis(20));
        assert!(!observed);
    }

    #[test]
    fn test_bounded_wait_sees_immediate_value() {
        let observed = fast().wait_till_true_for(|| true, Duration::from_millis(20));
        assert!(observed);
    }

    #[test]
    fn test_default_poll_interval() {
        assert_eq!(Condition::new().poll_interval(), DEFAULT_POLL_INTERVAL);
    }
}
