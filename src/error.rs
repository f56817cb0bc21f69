//! Error types and shared shape checks.

/// Errors reported by the gradient engines, the model and the trainer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescentError {
    /// Two inputs that must agree in length (or rows/columns) do not.
    #[error("shape mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// The dataset has no examples (or no feature columns).
    #[error("dataset is empty: at least one example and one feature are required")]
    EmptyDataset,

    /// Invalid trainer configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Learning rate must be finite and non-negative.
    #[error("learning_rate must be finite and non-negative, got {0}")]
    InvalidLearningRate(f64),
}

/// Result alias used throughout the crate.
pub type Result<T, E = DescentError> = std::result::Result<T, E>;

/// Check that `got` equals `expected`, naming the mismatched input otherwise.
#[inline]
pub(crate) fn ensure_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(DescentError::ShapeMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

/// Reject datasets without examples.
#[inline]
pub(crate) fn ensure_non_empty(n_rows: usize) -> Result<()> {
    if n_rows == 0 {
        return Err(DescentError::EmptyDataset);
    }
    Ok(())
}
