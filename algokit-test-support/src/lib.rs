//! Shared test utilities used across algokit crates.

pub mod ci;
pub mod tracing;
