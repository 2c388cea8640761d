//! # contrast-core
//!
//! Shared instrumentation for the convention contrasts.
//!
//! The contrast modules in `contrast-rules` demonstrate good and poor
//! renditions of everyday coding conventions. This crate provides the
//! machinery those renditions are observed through:
//!
//! - [`resource`]: a release ledger and a scoped session handle, so tests
//!   can count releases instead of trusting them
//! - [`spinlock`]: a spin lock with both a manual interface and a
//!   guard-scoped interface
//! - [`fault`]: deterministic seeded failure injection for forcing the
//!   simulated-failure paths
//! - [`contract`]: pass/fail reporting for each observable guarantee
//! - [`error`]: the shared error type fallible demonstrations return

pub mod contract;
pub mod error;
pub mod fault;
pub mod resource;
pub mod spinlock;

pub use contract::{ContractChecker, ContractResult, ContractSummary};
pub use error::WorkError;
pub use fault::{FailureConfig, FailureSource};
pub use resource::{ReleaseLedger, Session};
pub use spinlock::{SpinGuard, SpinLock};
