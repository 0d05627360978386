//!
//! `linfa-regression` provides an ordinary least squares engine which describes every
//! variable it is given before fitting the model.
//!
//! ## The Big Picture
//!
//! A regression report usually consists of three parts: a table describing every predictor
//! and the response, the fitted coefficients and the fitted values. This crate computes all
//! of them in a single, stateless call, so that a front end only has to slice its data into
//! columns and render the results.
//!
//! ## Current state
//!
//! `linfa-regression` currently provides:
//! - descriptive statistics (count, range, mean, variance, standard deviation) per column
//! - covariance, Pearson correlation and its p-value against the response
//! - ordinary least squares with an implicit intercept, solved by normal equations or a
//!   QR factorisation
//! - an ANOVA table with F test and (adjusted) R²
//!
//! ## Example
//!
//! ```rust
//! let data = vec![vec![1., 2., 3., 4., 5.]];
//! let y: Vec<f64> = vec![2., 4., 6., 8., 10.];
//!
//! let (summary, params, ycap) = linfa_regression::fit(&data, &y).unwrap();
//! assert_eq!(summary.len(), 2);
//! assert!((params[0] - 2.).abs() < 1e-10);
//! assert_eq!(ycap.len(), 5);
//! ```

pub mod anova;
pub mod correlation;
pub mod dataset;
pub mod error;
mod float;
mod hyperparams;
mod metrics_regression;
mod ols;
pub mod param_guard;
pub mod prelude;
pub mod solver;
pub mod summary;
pub mod traits;

pub use anova::AnovaTable;
pub use dataset::Dataset;
pub use error::{RegressionError, Result};
pub use float::Float;
pub use hyperparams::{LinearRegression, LinearRegressionValidParams, Solver};
pub use ols::{fit, FittedLinearRegression, INTERCEPT_NAME};
pub use param_guard::ParamGuard;
pub use summary::{VariableSummary, SUMMARY_KEYS};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
