//! `PtoBuddy` - A personal paid-time-off ledger
//!
//! This crate provides the core of a personal PTO tracker: a running balance
//! of accrued vs. used leave hours, reconciled against a catalog of
//! pre-known leave days and persisted through a pluggable key-value
//! boundary. UI concerns stay outside; everything here is synchronous,
//! deterministic, and independently testable.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Accrual parameters and default-entry catalog configuration
pub mod config;
/// Core business logic - accrual math and default-entry reconciliation
pub mod core;
/// Calendar-day normalization and day-delta computation
pub mod datemath;
/// Unified error types and result handling
pub mod errors;
/// Persisted data model - entries and the state record
pub mod models;
/// Persistence boundary and the state store
pub mod store;

#[cfg(test)]
pub mod test_utils;
