//! Scoped-lock contrast: guard-bound release against manual release.
//!
//! Both renditions take the lock, run a fallible work step, and return its
//! outcome. The manual rendition releases by hand, so an error (or a panic)
//! between acquire and release leaves the lock held forever; the latent
//! deadlock is the exhibit and stays unfixed. The scoped rendition binds the
//! acquisition to a guard; release happens on normal return, error return,
//! and unwind alike.
//!
//! The lock is passed in explicitly; there is no ambient global.

use contrast_core::error::WorkError;
use contrast_core::spinlock::SpinLock;

/// Manual acquire/release around the work step.
///
/// When `work` fails, the `?` returns before the release ever runs.
pub fn update_manual(
    lock: &SpinLock,
    work: impl FnOnce() -> Result<(), WorkError>,
) -> Result<(), WorkError> {
    lock.acquire();
    work()?; // An error exits here with the lock still held.
    lock.release();
    Ok(())
}

/// Guard-scoped locking: released however this function exits.
pub fn update_scoped(
    lock: &SpinLock,
    work: impl FnOnce() -> Result<(), WorkError>,
) -> Result<(), WorkError> {
    let _guard = lock.lock_scoped();
    work()?;
    Ok(())
}
