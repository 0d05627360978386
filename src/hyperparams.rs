use crate::error::RegressionError;
use crate::param_guard::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Least squares solver used for the augmented design matrix
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Cholesky factorisation of `XᵀX`
    NormalEquations,
    /// Householder QR factorisation of `X`
    Qr,
    /// Normal equations, falling back to QR when `XᵀX` is numerically singular
    Auto,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::Auto
    }
}

/// Validated hyperparameters of the ordinary least squares engine
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams {
    solver: Solver,
    tolerance: Option<f64>,
}

impl LinearRegressionValidParams {
    pub fn solver(&self) -> Solver {
        self.solver
    }

    /// Relative threshold below which a pivot is treated as zero, `None` selects
    /// `sqrt(epsilon)` of the floating point type being fitted
    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }
}

/// An ordinary least squares linear regression with an implicit intercept.
///
/// LinearRegression fits a linear model to minimize the residual sum of squares between the
/// observed response and the response predicted by the linear approximation
///
/// y = Xb + c
///
/// and describes every predictor and the response with count, range, moments and their
/// correlation with the response.
///
/// ## Examples
///
/// ```rust
/// use linfa_regression::prelude::*;
///
/// let dataset = Dataset::from_columns(&[vec![1., 2., 3., 4., 5.]], &[2f64, 4., 6., 8., 10.]).unwrap();
/// let model = LinearRegression::new().fit(&dataset).unwrap();
///
/// assert!((model.params()[0] - 2.).abs() < 1e-10);
/// assert!(model.intercept().abs() < 1e-10);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression(LinearRegressionValidParams);

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a default linear regression using the `Auto` solver
    pub fn new() -> Self {
        LinearRegression(LinearRegressionValidParams {
            solver: Solver::default(),
            tolerance: None,
        })
    }

    /// Select the least squares solver
    pub fn solver(mut self, solver: Solver) -> Self {
        self.0.solver = solver;
        self
    }

    /// Relative pivot threshold for rank detection, has to lie in (0, 1)
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = Some(tolerance);
        self
    }
}

impl ParamGuard for LinearRegression {
    type Checked = LinearRegressionValidParams;
    type Error = RegressionError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        match self.0.tolerance {
            Some(tol) if !tol.is_finite() || tol <= 0. || tol >= 1. => Err(
                RegressionError::InvalidParams(format!("tolerance {} not in (0, 1)", tol)),
            ),
            _ => Ok(&self.0),
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_auto_solver() {
        let params = LinearRegression::default().check().unwrap();

        assert_eq!(params.solver(), Solver::Auto);
        assert_eq!(params.tolerance(), None);
    }

    #[test]
    fn tolerance_out_of_range() {
        for tol in [0., -1e-3, 1., f64::NAN] {
            let res = LinearRegression::new().tolerance(tol).check();
            assert!(matches!(res, Err(RegressionError::InvalidParams(_))));
        }

        let params = LinearRegression::new()
            .solver(Solver::Qr)
            .tolerance(1e-6)
            .check_unwrap();
        assert_eq!(params.solver(), Solver::Qr);
        assert_eq!(params.tolerance(), Some(1e-6));
    }
}
