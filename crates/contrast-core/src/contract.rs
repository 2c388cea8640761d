//! Contract verification types.
//!
//! Every contrast module promises an observable guarantee (a resource is
//! released exactly once, a lock is free again after return, a typed `None`
//! dispatches to the reference flavour). A [`ContractResult`] records whether
//! one such guarantee held, and [`ContractChecker`] aggregates the results
//! for a whole set of contrasts.

/// Result of checking a single contract.
///
/// `rule` names the contrast module the contract belongs to, so a failing
/// report points straight at the code under discussion.
#[derive(Debug, Clone)]
pub struct ContractResult {
    /// Human-readable contract name (e.g., "ReleasedOnEveryPath")
    pub name: &'static str,

    /// Contrast module this contract belongs to (e.g., "ownership")
    pub rule: &'static str,

    /// Whether the contract holds
    pub holds: bool,

    /// Description of the violation if the contract does not hold
    pub violation: Option<String>,
}

impl ContractResult {
    /// Create a passing contract result.
    #[must_use]
    pub fn pass(name: &'static str, rule: &'static str) -> Self {
        debug_assert!(!name.is_empty(), "Contract name must not be empty");
        debug_assert!(!rule.is_empty(), "Rule name must not be empty");

        Self {
            name,
            rule,
            holds: true,
            violation: None,
        }
    }

    /// Create a failing contract result.
    #[must_use]
    pub fn fail(name: &'static str, rule: &'static str, violation: String) -> Self {
        debug_assert!(!name.is_empty(), "Contract name must not be empty");
        debug_assert!(!rule.is_empty(), "Rule name must not be empty");
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        Self {
            name,
            rule,
            holds: false,
            violation: Some(violation),
        }
    }

    /// Format as a single-line status for reporting.
    #[must_use]
    pub fn format_status(&self) -> String {
        debug_assert!(!self.name.is_empty());

        if self.holds {
            format!("[PASS] {} ({})", self.name, self.rule)
        } else {
            format!(
                "[FAIL] {} ({}): {}",
                self.name,
                self.rule,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Trait for verifying a set of contracts.
///
/// Implementations run their demonstrations and report one result per
/// observable guarantee.
pub trait ContractChecker {
    /// Check all contracts and return results.
    ///
    /// Even passing contracts are included for completeness.
    fn check_all(&self) -> Vec<ContractResult>;

    /// Verify all contracts, returning the first failure.
    ///
    /// Useful for fail-fast testing where the first violation should
    /// stop the run.
    fn verify_all(&self) -> Result<(), ContractResult> {
        for result in self.check_all() {
            if !result.holds {
                return Err(result);
            }
        }
        Ok(())
    }

    /// Check if all contracts hold.
    fn all_hold(&self) -> bool {
        self.check_all().iter().all(|r| r.holds)
    }

    /// Get a summary of all contract check results.
    fn summary(&self) -> ContractSummary {
        let results = self.check_all();
        let passed = results.iter().filter(|r| r.holds).count() as u64;
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;

        debug_assert!(passed + failed == total);

        ContractSummary {
            passed,
            failed,
            total,
            results,
        }
    }
}

/// Summary of contract check results.
#[derive(Debug, Clone)]
pub struct ContractSummary {
    /// Number of contracts that passed
    pub passed: u64,
    /// Number of contracts that failed
    pub failed: u64,
    /// Total number of contracts checked
    pub total: u64,
    /// Individual results
    pub results: Vec<ContractResult>,
}

impl ContractSummary {
    /// Format as a report string.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Contract Check Summary: {}/{} passed\n",
            self.passed, self.total
        );

        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        report
    }
}
