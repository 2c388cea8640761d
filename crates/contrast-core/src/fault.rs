//! Deterministic failure injection.
//!
//! The contrasts that show early-exit behaviour (ownership, locking) consult
//! a [`FailureSource`] where a real system would hit an actual error. The
//! source is seeded: the same seed produces the same decision sequence, so a
//! probabilistic run that trips a contract can be replayed exactly.
//!
//! ## Reproducibility
//!
//! ```bash
//! FAULT_SEED=12345 cargo test
//! ```

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Configuration for failure injection.
#[derive(Debug, Clone, Copy)]
pub struct FailureConfig {
    /// Probability of a failure (0.0 to 1.0)
    pub failure_probability: f64,
    /// Whether failure injection is enabled
    pub enabled: bool,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self {
            failure_probability: 0.01, // 1% chance
            enabled: true,
        }
    }
}

impl FailureConfig {
    /// No failures - forces every success path.
    #[must_use]
    pub fn none() -> Self {
        Self {
            failure_probability: 0.0,
            enabled: false,
        }
    }

    /// Certain failure - forces every early-exit path.
    #[must_use]
    pub fn always() -> Self {
        Self {
            failure_probability: 1.0,
            enabled: true,
        }
    }

    /// Fail with the given probability.
    #[must_use]
    pub fn intermittent(failure_probability: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&failure_probability),
            "Failure probability must be in [0.0, 1.0]"
        );
        Self {
            failure_probability,
            enabled: true,
        }
    }
}

/// Maximum number of decisions before warning.
const DECISIONS_COUNT_WARNING_MAX: u64 = 1_000_000_000;

/// Deterministic failure source.
///
/// Wraps a seeded Xoshiro256** so every decision sequence is reproducible.
///
/// # Example
///
/// ```rust
/// use contrast_core::fault::{FailureConfig, FailureSource};
///
/// let mut faults = FailureSource::new(12345, FailureConfig::always());
/// assert!(faults.should_fail());
/// ```
pub struct FailureSource {
    seed: u64,
    rng: Xoshiro256StarStar,
    config: FailureConfig,
    decisions_count: u64,
    failures_count: u64,
}

impl FailureSource {
    /// Create a new failure source with the given seed and config.
    #[must_use]
    pub fn new(seed: u64, config: FailureConfig) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero for better randomness");
        debug_assert!(
            (0.0..=1.0).contains(&config.failure_probability),
            "Failure probability must be in [0.0, 1.0]"
        );

        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            config,
            decisions_count: 0,
            failures_count: 0,
        }
    }

    /// Create with the default config.
    #[must_use]
    pub fn with_default_config(seed: u64) -> Self {
        Self::new(seed, FailureConfig::default())
    }

    /// Get the seed used to create this source.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Check if a failure should occur at this point.
    ///
    /// Returns true with probability `config.failure_probability`.
    pub fn should_fail(&mut self) -> bool {
        if !self.config.enabled {
            return false;
        }

        self.decisions_count += 1;
        debug_assert!(
            self.decisions_count < DECISIONS_COUNT_WARNING_MAX,
            "Very high number of failure decisions - possible infinite loop"
        );

        let result = self.rng.gen_bool(self.config.failure_probability);
        if result {
            self.failures_count += 1;
        }
        result
    }

    /// Number of decisions taken so far.
    #[must_use]
    pub fn decisions_count(&self) -> u64 {
        self.decisions_count
    }

    /// Number of failures injected so far.
    #[must_use]
    pub fn failures_count(&self) -> u64 {
        self.failures_count
    }

    /// Get current config.
    #[must_use]
    pub fn config(&self) -> &FailureConfig {
        &self.config
    }

    /// Reset to the initial state (same seed, counters cleared).
    pub fn reset(&mut self) {
        self.rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        self.decisions_count = 0;
        self.failures_count = 0;
    }

    /// Format seed for error messages.
    ///
    /// Use this in test failures so the seed can be easily copied.
    #[must_use]
    pub fn format_seed(&self) -> String {
        format!("FAULT_SEED={}", self.seed)
    }
}

/// Get the failure seed from the environment or generate a random one.
///
/// Prints the seed for reproduction. Use `FAULT_SEED=<seed>` to reproduce.
#[must_use]
pub fn seed_from_env_or_random() -> u64 {
    match std::env::var("FAULT_SEED") {
        Ok(s) => {
            let seed: u64 = s.parse().expect("FAULT_SEED must be a valid u64");
            println!("FAULT_SEED={} (from environment)", seed);
            seed
        }
        Err(_) => {
            let seed = rand::random::<u64>();
            println!("FAULT_SEED={} (randomly generated)", seed);
            seed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_failures_when_disabled() {
        let mut faults = FailureSource::new(12345, FailureConfig::none());

        for _ in 0..1000 {
            assert!(!faults.should_fail());
        }
        assert_eq!(faults.failures_count(), 0);
    }

    #[test]
    fn test_always_fails() {
        let mut faults = FailureSource::new(12345, FailureConfig::always());

        for _ in 0..100 {
            assert!(faults.should_fail());
        }
        assert_eq!(faults.failures_count(), 100);
    }

    #[test]
    fn test_deterministic_decisions() {
        let mut source1 = FailureSource::new(42, FailureConfig::intermittent(0.5));
        let mut source2 = FailureSource::new(42, FailureConfig::intermittent(0.5));

        for _ in 0..100 {
            assert_eq!(source1.should_fail(), source2.should_fail());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut source1 = FailureSource::new(42, FailureConfig::intermittent(0.5));
        let mut source2 = FailureSource::new(43, FailureConfig::intermittent(0.5));

        let seq1: Vec<bool> = (0..64).map(|_| source1.should_fail()).collect();
        let seq2: Vec<bool> = (0..64).map(|_| source2.should_fail()).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_failure_probability() {
        let mut faults = FailureSource::new(12345, FailureConfig::intermittent(0.5));

        let trials = 10000;
        let mut failures = 0;
        for _ in 0..trials {
            if faults.should_fail() {
                failures += 1;
            }
        }

        // With 50% probability, expect ~5000 failures
        // Allow for statistical variation
        let ratio = failures as f64 / trials as f64;
        assert!(
            (0.45..=0.55).contains(&ratio),
            "Expected ~50% failures, got {}%",
            ratio * 100.0
        );
    }

    #[test]
    fn test_reset_replays_sequence() {
        let mut faults = FailureSource::new(12345, FailureConfig::intermittent(0.5));

        let first: Vec<bool> = (0..32).map(|_| faults.should_fail()).collect();
        faults.reset();
        assert_eq!(faults.decisions_count(), 0);
        let second: Vec<bool> = (0..32).map(|_| faults.should_fail()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_seed() {
        let faults = FailureSource::with_default_config(12345);
        assert_eq!(faults.format_seed(), "FAULT_SEED=12345");
    }
}
