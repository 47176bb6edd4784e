//! Accounting for relationship-type merge runs.
//!
//! This module provides counters for what happened while merging exports
//! into a set: how many names were new, how many were duplicates, and how
//! many files contributed.

mod stats;
pub use stats::*;
