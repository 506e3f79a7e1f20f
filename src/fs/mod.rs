//! File system I/O operations for loading and saving maze scenarios.
//!
//! This module provides the JSON scenario format consumed by the CLI:
//! named locations with food flags, symmetric tracks, and the queries to
//! run against the materialized graph.

mod scenario;

pub use scenario::*;
