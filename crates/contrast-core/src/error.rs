//! Shared error type for the fallible demonstrations.

use thiserror::Error;

/// Failure raised by a demonstration work step.
///
/// The error-signalling contrast absorbs these at the call site; the
/// locking contrast uses them to force early-exit paths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkError {
    /// Balance arithmetic left the representable range.
    #[error("balance recomputation overflowed")]
    BalanceOverflow,

    /// A failure injected by the deterministic failure source.
    #[error("injected failure")]
    Injected,
}
