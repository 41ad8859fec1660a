//! The tools module provides helper functions for the codec and its benchmarks.
//!
//! The tools are:
//! - cli: Command line interface for the benchmark runner.
//! - config: JSON benchmark configuration.
//! - freq_count: Frequency count of a byte slice.
//! - test_data: Deterministic benchmark input.
//!
pub mod cli;
pub mod config;
pub mod freq_count;
pub mod test_data;
