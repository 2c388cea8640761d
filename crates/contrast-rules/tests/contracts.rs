//! End-to-end check that every machine-verifiable contract holds.
//!
//! The seed only matters for reproduction: the contracts force their paths
//! with the `always`/`none` presets, so any seed must produce a clean run.

use contrast_core::contract::ContractChecker;
use contrast_core::fault::seed_from_env_or_random;
use contrast_rules::RuleContracts;

#[test]
fn all_contracts_hold_for_any_seed() {
    let seed = seed_from_env_or_random();
    let contracts = RuleContracts::new(seed);

    let summary = contracts.summary();

    assert_eq!(
        summary.failed,
        0,
        "FAULT_SEED={}\n{}",
        seed,
        summary.format_report()
    );
    assert_eq!(summary.passed, summary.total);
}

#[test]
fn report_lists_one_line_per_contract() {
    let contracts = RuleContracts::new(12345);
    let summary = contracts.summary();

    let report = summary.format_report();
    let status_lines = report.lines().filter(|l| l.starts_with("[PASS]")).count() as u64;

    assert_eq!(status_lines, summary.total);
}
