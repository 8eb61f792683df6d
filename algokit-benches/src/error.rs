//! Benchmark setup error type.

use algokit_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic input generation failed.
    #[error("synthetic input generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Graph construction or traversal rejected the generated input.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
