//! # contrast-rules
//!
//! Paired good/poor renditions of ten everyday coding conventions.
//!
//! Each module holds one contrast. The good rendition is the one to imitate;
//! the poor rendition is compiled and separately invocable so tests can
//! observe the behaviour it is discouraged for, but nothing on the shipped
//! path ever calls it.
//!
//! | Module | Convention |
//! |-----------|------------------------------------------|
//! | naming    | value/type spelling                      |
//! | branching | structured two-way branch                |
//! | ownership | scoped release vs. leak on early exit    |
//! | borrowing | shared borrow for read-only access       |
//! | locking   | guard-scoped vs. manual lock release     |
//! | recovery  | typed errors absorbed at the call site   |
//! | passing   | borrowed slices over owned vectors       |
//! | casting   | compile-checked widening                 |
//! | nullable  | typed `None` over a zero literal         |
//! | scoping   | named modules over flat namespaces       |
//!
//! The contracts each contrast promises (a session is released exactly once,
//! a lock is free again after an error, a typed `None` dispatches to the
//! reference flavour) are collected in [`contracts`].

pub mod borrowing;
pub mod branching;
pub mod casting;
pub mod contracts;
pub mod locking;
pub mod naming;
pub mod nullable;
pub mod ownership;
pub mod passing;
pub mod recovery;
pub mod scoping;

pub use contracts::RuleContracts;

/// Number of convention contrasts in this crate.
pub const RULES_COUNT: u64 = 10;

/// Line the demo binary prints once the whole crate has compiled.
pub const CONFIRMATION: &str = "all 10 convention contrasts compiled successfully";
