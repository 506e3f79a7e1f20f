//! Performance statistics tracking for path queries.
//!
//! This module provides structures for collecting and aggregating metrics about
//! search behavior, including vertices expanded, starved branches, and food
//! tokens spent by the feasibility search.

mod stats;
pub use stats::*;
