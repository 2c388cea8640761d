//! Ownership contrast: scoped release against a leak on early exit.
//!
//! Both renditions open one [`Session`] and consult the failure source for a
//! simulated error. The raw rendition holds the session through an owning
//! raw pointer and forgets to reclaim it on the failure path; that leak is
//! the exhibit, left intact on purpose. The scoped rendition cannot leak:
//! the session drops on every exit path.
//!
//! The caller's [`ReleaseLedger`] records what actually happened.

use contrast_core::fault::FailureSource;
use contrast_core::resource::{ReleaseLedger, Session};

/// Raw-pointer ownership with a leak on the failure path.
///
/// The success path reclaims the allocation explicitly; the early return
/// does not, and the session's release is never recorded.
pub fn open_session_raw(ledger: &ReleaseLedger, faults: &mut FailureSource) {
    let session = Box::into_raw(Box::new(Session::open(ledger)));

    if faults.should_fail() {
        // Early exit: the allocation above is never reclaimed.
        return;
    }

    // Safety: `session` came from Box::into_raw above and is reclaimed on
    // this path only.
    unsafe { drop(Box::from_raw(session)) };
}

/// Scoped ownership: the session is released on every exit path.
pub fn open_session_scoped(ledger: &ReleaseLedger, faults: &mut FailureSource) {
    let _session = Session::open(ledger);

    if faults.should_fail() {
        return;
    }

    // Dropped here, and equally on the early return above.
}
