//! Property-based tests for depth-first edge classification.
//!
//! Checks the explicit-stack traversal against a recursive colouring oracle,
//! validates structural invariants of the resulting forest, and confirms that
//! repeated runs are identical across several graph topologies.

mod oracle;
mod strategies;
mod structural;
mod types;
