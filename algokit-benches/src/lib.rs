//! Benchmark support crate for algokit.
//!
//! Provides seeded synthetic graphs and strings plus parameter types used by
//! the Criterion benchmarks for depth-first classification, edit distance,
//! and disjoint-set connectivity.

pub mod error;
pub mod params;
pub mod source;
