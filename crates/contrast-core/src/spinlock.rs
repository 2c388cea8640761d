//! A spin lock with both a manual and a guard-scoped interface.
//!
//! The locking contrast needs a mutual-exclusion resource that can be
//! mis-handled on purpose: [`SpinLock::acquire`] / [`SpinLock::release`] are
//! the manual pair an early exit can leave unbalanced, and
//! [`SpinLock::lock_scoped`] is the guard-returning interface that releases
//! on every exit path, unwinding included.
//!
//! The shipped demonstration never contends for the lock; `try_acquire` is
//! what tests use to probe whether a previous caller left it held.

#[cfg(loom)]
use loom::sync::atomic::{AtomicBool, Ordering};
#[cfg(not(loom))]
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_utils::Backoff;

/// Mutual exclusion over a single atomic flag.
#[derive(Debug)]
pub struct SpinLock {
    held: AtomicBool,
}

impl Default for SpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinLock {
    /// Create an unheld lock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    /// Attempt to acquire without blocking.
    ///
    /// Returns true if this call took the lock.
    pub fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Acquire, spinning with backoff until the lock is free.
    pub fn acquire(&self) {
        let backoff = Backoff::new();
        while !self.try_acquire() {
            backoff.snooze();
        }
    }

    /// Release a previously acquired lock.
    ///
    /// Callers of the manual interface own the obligation to reach this on
    /// every path; the locking contrast shows what happens when they don't.
    pub fn release(&self) {
        debug_assert!(self.is_held(), "Release without a matching acquire");
        self.held.store(false, Ordering::Release);
    }

    /// Whether the lock is currently held.
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Acquire and return a guard that releases when dropped.
    #[must_use]
    pub fn lock_scoped(&self) -> SpinGuard<'_> {
        self.acquire();
        SpinGuard { lock: self }
    }
}

/// Scope-bound ownership of an acquired [`SpinLock`].
///
/// Dropping the guard releases the lock, however the owning scope exits.
#[derive(Debug)]
pub struct SpinGuard<'a> {
    lock: &'a SpinLock,
}

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}


#[cfg(all(test, loom))]
mod loom_tests {
    use super::*;

    #[test]
    fn test_try_acquire_is_mutually_exclusive() {
        loom::model(|| {
            let lock = loom::sync::Arc::new(SpinLock::new());
            let other = loom::sync::Arc::clone(&lock);

            let handle = loom::thread::spawn(move || other.try_acquire());
            let here = lock.try_acquire();
            let there = handle.join().unwrap();

            assert!(!(here && there), "Both threads took the lock");
            assert!(here || there, "Neither thread took the free lock");
        });
    }
}
