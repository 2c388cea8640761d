//! Contracts the contrasts promise, checked by running them.
//!
//! | Contract | Module | Guarantee |
//! |----------|--------|-----------|
//! | BranchSelectsExactlyOne | branching | one action per call, chosen by the flag |
//! | ScopedReleasesOnEveryPath | ownership | one release per call, all paths |
//! | RawLeaksOnFailure | ownership | the failure path releases nothing |
//! | GuardFreesLockAfterError | locking | lock acquirable after an error return |
//! | ManualLeavesLockHeld | locking | lock still held after the manual rendition errors |
//! | TypedNoneSelectsReference | nullable | typed `None` → reference flavour, bare zero → integer |
//! | WideningKeepsBehaviour | casting | the widened reference answers as the general capability |
//!
//! The two "leaves it broken" contracts assert that the breakage happens;
//! fixing it would defeat the exhibit.

use contrast_core::contract::{ContractChecker, ContractResult};
use contrast_core::error::WorkError;
use contrast_core::fault::{FailureConfig, FailureSource};
use contrast_core::resource::ReleaseLedger;
use contrast_core::spinlock::SpinLock;

use crate::nullable::Resolved;
use crate::{branching, casting, locking, nullable, ownership};

/// Contract checker over the contrast modules.
///
/// Carries the failure seed so a report from a probabilistic run can be
/// reproduced exactly.
pub struct RuleContracts {
    seed: u64,
}

impl RuleContracts {
    /// Create a checker using the given failure seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero");
        Self { seed }
    }

    /// The failure seed this checker runs with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Exactly one action runs per call, selected by the flag.
    fn check_branch_selects_exactly_one(&self) -> ContractResult {
        let mut urgent_runs: u64 = 0;
        let mut routine_runs: u64 = 0;

        branching::route(true, || urgent_runs += 1, || routine_runs += 1);
        if (urgent_runs, routine_runs) != (1, 0) {
            return ContractResult::fail(
                "BranchSelectsExactlyOne",
                "branching",
                format!(
                    "urgent call ran urgent {} times and routine {} times",
                    urgent_runs, routine_runs
                ),
            );
        }

        branching::route(false, || urgent_runs += 1, || routine_runs += 1);
        if (urgent_runs, routine_runs) != (1, 1) {
            return ContractResult::fail(
                "BranchSelectsExactlyOne",
                "branching",
                format!(
                    "routine call ran urgent {} times and routine {} times",
                    urgent_runs, routine_runs
                ),
            );
        }

        ContractResult::pass("BranchSelectsExactlyOne", "branching")
    }

    /// The scoped rendition releases exactly once per call on both paths.
    fn check_scoped_releases_on_every_path(&self) -> ContractResult {
        let ledger = ReleaseLedger::new();

        let mut faults = FailureSource::new(self.seed, FailureConfig::always());
        ownership::open_session_scoped(&ledger, &mut faults);

        let mut faults = FailureSource::new(self.seed, FailureConfig::none());
        ownership::open_session_scoped(&ledger, &mut faults);

        if ledger.released_count() != 2 || ledger.leaked_count() != 0 {
            return ContractResult::fail(
                "ScopedReleasesOnEveryPath",
                "ownership",
                format!(
                    "expected 2 releases and no leaks, saw {} releases and {} leaks",
                    ledger.released_count(),
                    ledger.leaked_count()
                ),
            );
        }

        ContractResult::pass("ScopedReleasesOnEveryPath", "ownership")
    }

    /// The raw rendition leaks on failure and releases on success.
    fn check_raw_leaks_on_failure(&self) -> ContractResult {
        let ledger = ReleaseLedger::new();

        let mut faults = FailureSource::new(self.seed, FailureConfig::always());
        ownership::open_session_raw(&ledger, &mut faults);

        if ledger.released_count() != 0 {
            return ContractResult::fail(
                "RawLeaksOnFailure",
                "ownership",
                "the failure path released the session; the exhibit leak is gone".to_string(),
            );
        }

        let mut faults = FailureSource::new(self.seed, FailureConfig::none());
        ownership::open_session_raw(&ledger, &mut faults);

        if ledger.released_count() != 1 || ledger.leaked_count() != 1 {
            return ContractResult::fail(
                "RawLeaksOnFailure",
                "ownership",
                format!(
                    "expected 1 release and 1 leak after both paths, saw {} and {}",
                    ledger.released_count(),
                    ledger.leaked_count()
                ),
            );
        }

        ContractResult::pass("RawLeaksOnFailure", "ownership")
    }

    /// The guard-scoped rendition leaves the lock acquirable after an error.
    fn check_guard_frees_lock_after_error(&self) -> ContractResult {
        let lock = SpinLock::new();

        let outcome = locking::update_scoped(&lock, || Err(WorkError::Injected));
        debug_assert!(outcome.is_err());

        if !lock.try_acquire() {
            return ContractResult::fail(
                "GuardFreesLockAfterError",
                "locking",
                "lock was still held after the scoped rendition returned an error".to_string(),
            );
        }
        lock.release();

        ContractResult::pass("GuardFreesLockAfterError", "locking")
    }

    /// The manual rendition leaves the lock held after an error.
    fn check_manual_leaves_lock_held(&self) -> ContractResult {
        let lock = SpinLock::new();

        let outcome = locking::update_manual(&lock, || Err(WorkError::Injected));
        debug_assert!(outcome.is_err());

        if lock.try_acquire() {
            return ContractResult::fail(
                "ManualLeavesLockHeld",
                "locking",
                "the manual rendition released on the error path; the exhibit is gone".to_string(),
            );
        }

        ContractResult::pass("ManualLeavesLockHeld", "locking")
    }

    /// Typed `None` selects the reference flavour; a bare zero the integer one.
    fn check_typed_none_selects_reference(&self) -> ContractResult {
        if nullable::submit_absent() != Resolved::Reference {
            return ContractResult::fail(
                "TypedNoneSelectsReference",
                "nullable",
                "typed None resolved to the integer flavour".to_string(),
            );
        }

        if nullable::submit_zero() != Resolved::Integer {
            return ContractResult::fail(
                "TypedNoneSelectsReference",
                "nullable",
                "bare zero resolved to the reference flavour".to_string(),
            );
        }

        ContractResult::pass("TypedNoneSelectsReference", "nullable")
    }

    /// The widened reference behaves as a valid general-capability value.
    fn check_widening_keeps_behaviour(&self) -> ContractResult {
        let record = casting::AuditRecord::with_entries(3);
        let described = casting::as_report(&record).describe();

        if !described.contains("3 entries") {
            return ContractResult::fail(
                "WideningKeepsBehaviour",
                "casting",
                format!("widened reference described itself as {:?}", described),
            );
        }

        ContractResult::pass("WideningKeepsBehaviour", "casting")
    }
}

impl ContractChecker for RuleContracts {
    fn check_all(&self) -> Vec<ContractResult> {
        vec![
            self.check_branch_selects_exactly_one(),
            self.check_scoped_releases_on_every_path(),
            self.check_raw_leaks_on_failure(),
            self.check_guard_frees_lock_after_error(),
            self.check_manual_leaves_lock_held(),
            self.check_typed_none_selects_reference(),
            self.check_widening_keeps_behaviour(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_contract_holds() {
        let contracts = RuleContracts::new(12345);
        let summary = contracts.summary();

        assert_eq!(summary.failed, 0, "{}", summary.format_report());
        assert_eq!(summary.total, 7);
    }

    #[test]
    fn test_verify_all_is_clean() {
        let contracts = RuleContracts::new(42);
        assert!(contracts.verify_all().is_ok());
    }
}
