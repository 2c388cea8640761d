//! Error-signalling contrast: a typed error absorbed at the call site,
//! against a sentinel value conflated with legitimate results.

use contrast_core::error::WorkError;

/// Recompute a balance; fails when the subtraction overflows.
pub fn recompute_balance(deposits: i64, withdrawals: i64) -> Result<i64, WorkError> {
    deposits
        .checked_sub(withdrawals)
        .ok_or(WorkError::BalanceOverflow)
}

/// Invoke the fallible recomputation and absorb any failure on the spot,
/// reporting its description on standard error. Nothing propagates to the
/// caller.
pub fn settle(deposits: i64, withdrawals: i64) {
    if let Err(error) = recompute_balance(deposits, withdrawals) {
        eprintln!("error: {error}");
    }
}

/// Sentinel-style signalling: `-1` means failure, and also means a
/// perfectly legitimate balance of minus one.
pub fn recompute_balance_sentinel(deposits: i64, withdrawals: i64) -> i64 {
    match deposits.checked_sub(withdrawals) {
        Some(balance) => balance,
        None => -1,
    }
}
