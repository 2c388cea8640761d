//! Release accounting for scope-bound resources.
//!
//! The ownership contrast needs a resource whose cleanup can be counted
//! rather than trusted: a [`Session`] records its release on the
//! [`ReleaseLedger`] it was opened against, so a test can assert that a
//! scoped handle released exactly once, and that the deliberately leaky
//! rendition released not at all.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts how many sessions were opened and how many were released.
///
/// The ledger outlives the sessions opened against it; callers construct one
/// and pass it into the demonstrations explicitly.
#[derive(Debug, Default)]
pub struct ReleaseLedger {
    opened: AtomicU64,
    released: AtomicU64,
}

impl ReleaseLedger {
    /// Create a ledger with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions opened so far.
    #[must_use]
    pub fn opened_count(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }

    /// Number of sessions released so far.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.released.load(Ordering::Relaxed)
    }

    /// Number of sessions opened but never released.
    #[must_use]
    pub fn leaked_count(&self) -> u64 {
        let opened = self.opened_count();
        let released = self.released_count();
        debug_assert!(released <= opened, "More releases than opens recorded");
        opened - released
    }

    fn record_open(&self) {
        self.opened.fetch_add(1, Ordering::Relaxed);
    }

    fn record_release(&self) {
        let released = self.released.fetch_add(1, Ordering::Relaxed) + 1;
        debug_assert!(
            released <= self.opened_count(),
            "Release recorded for a session that was never opened"
        );
    }
}

/// A scoped owning handle to an opened resource.
///
/// Opening records on the ledger immediately; the matching release is
/// recorded when the session drops. Whoever holds the session holds the
/// sole responsibility for that release.
#[derive(Debug)]
pub struct Session<'a> {
    ledger: &'a ReleaseLedger,
}

impl<'a> Session<'a> {
    /// Open a session against the given ledger.
    #[must_use]
    pub fn open(ledger: &'a ReleaseLedger) -> Self {
        ledger.record_open();
        Self { ledger }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.ledger.record_release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_drop_releases_once() {
        let ledger = ReleaseLedger::new();

        {
            let _session = Session::open(&ledger);
            // Still alive: the release must not have happened yet.
            assert_eq!(ledger.opened_count(), 1);
            assert_eq!(ledger.released_count(), 0);
        }

        assert_eq!(ledger.released_count(), 1);
        assert_eq!(ledger.leaked_count(), 0);
    }

    #[test]
    fn test_forgotten_session_is_a_leak() {
        let ledger = ReleaseLedger::new();

        let session = Session::open(&ledger);
        std::mem::forget(session);

        assert_eq!(ledger.opened_count(), 1);
        assert_eq!(ledger.released_count(), 0);
        assert_eq!(ledger.leaked_count(), 1);
    }

    #[test]
    fn test_multiple_sessions() {
        let ledger = ReleaseLedger::new();

        for _ in 0..10 {
            let _session = Session::open(&ledger);
        }

        assert_eq!(ledger.opened_count(), 10);
        assert_eq!(ledger.released_count(), 10);
    }
}
