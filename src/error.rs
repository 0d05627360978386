//! Error types of the regression engine
//!
use linfa_linalg::LinalgError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegressionError>;

/// An error when fitting a linear regression
///
/// Shape violations, numerically unsolvable systems and bad input values are kept apart so
/// that a caller can report them uniformly or differentiate them later.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("at least one predictor column needed")]
    EmptyDesign,
    #[error("dimension mismatch: expected {expected} samples, column {column} has {found}")]
    DimensionMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("at least two samples needed, got {0}")]
    NotEnoughSamples(usize),
    #[error("design matrix is singular: {0}")]
    SingularMatrix(String),
    #[error("invalid input {0}")]
    InvalidInput(String),
    #[error("invalid parameter {0}")]
    InvalidParams(String),
}

impl RegressionError {
    /// Whether the error is a violation of the input shape
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            RegressionError::EmptyDesign
                | RegressionError::DimensionMismatch { .. }
                | RegressionError::NotEnoughSamples(_)
        )
    }
}

impl From<LinalgError> for RegressionError {
    fn from(err: LinalgError) -> Self {
        RegressionError::SingularMatrix(err.to_string())
    }
}
