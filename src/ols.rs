//! Ordinary Least Squares
#![allow(non_snake_case)]
use ndarray::{concatenate, s, Array1, Array2, ArrayBase, Axis, Data, Ix2};
use tracing::debug;

use crate::anova::AnovaTable;
use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::hyperparams::{LinearRegression, LinearRegressionValidParams};
use crate::metrics_regression::Regression;
use crate::solver::solve_least_squares;
use crate::summary::{describe, VariableSummary};
use crate::traits::{Fit, PredictInplace};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Label of the intercept in the coefficient table
pub const INTERCEPT_NAME: &str = "Constant";

/// A fitted linear regression model which can be used for making predictions.
///
/// Besides the coefficients it keeps the description of every variable, the fitted values
/// of the training samples and their residuals, which is everything needed to render a
/// regression report.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    params: Array1<F>,
    summary: Vec<VariableSummary<F>>,
    ycap: Array1<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
    target_name: String,
}

impl<F: Float> Fit<F> for LinearRegressionValidParams {
    type Object = FittedLinearRegression<F>;

    /// Fit a linear regression model given a dataset with `(n_samples, n_features)` records
    /// and `n_samples` targets
    ///
    /// The column of ones for the intercept is appended to the records, the last fitted
    /// coefficient is the intercept.
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let X = dataset.records();
        let y = dataset.targets();
        let (n_samples, n_features) = X.dim();
        debug!(n_samples, n_features, solver = ?self.solver(), "fitting linear regression");

        let summary = describe(dataset)?;

        if n_samples <= n_features {
            return Err(RegressionError::SingularMatrix(format!(
                "{} samples are not enough for {} predictors and an intercept",
                n_samples, n_features
            )));
        }

        let X = concatenate(Axis(1), &[X, Array2::ones((n_samples, 1)).view()])
            .map_err(|err| RegressionError::InvalidInput(err.to_string()))?;
        let tolerance = match self.tolerance() {
            Some(tol) => F::cast(tol),
            None => F::epsilon().sqrt(),
        };
        let coefficients = solve_least_squares(&X, &y, self.solver(), tolerance)?;

        let ycap = X.dot(&coefficients);
        if ycap.iter().any(|x| !x.is_finite()) {
            return Err(RegressionError::InvalidInput(
                "predictions overflow the floating point range".to_string(),
            ));
        }

        let intercept = coefficients[n_features];
        let params = coefficients.slice(s![..n_features]).to_owned();

        Ok(FittedLinearRegression {
            intercept,
            params,
            summary,
            ycap,
            targets: y.to_owned(),
            feature_names: dataset.feature_names().to_vec(),
            target_name: dataset.target_name().to_string(),
        })
    }
}

impl LinearRegression {
    /// Fit on predictor columns and a response, returning `(summary, params, ycap)`
    ///
    /// `params` holds one weight per predictor column followed by the intercept, `summary`
    /// one description per predictor followed by the response.
    pub fn fit_columns<F: Float, C: AsRef<[F]>>(
        &self,
        data: &[C],
        y: &[F],
    ) -> Result<(Vec<VariableSummary<F>>, Vec<F>, Vec<F>)> {
        let dataset = Dataset::from_columns(data, y)?;
        let model = self.fit(&dataset)?;

        Ok(model.into_parts())
    }
}

/// Fit an ordinary least squares model with the default solver
///
/// `data` is a list of predictor columns of equal length, `y` the response. Returns one
/// description per column (response last), the coefficients (intercept last) and the fitted
/// values.
pub fn fit<F: Float, C: AsRef<[F]>>(
    data: &[C],
    y: &[F],
) -> Result<(Vec<VariableSummary<F>>, Vec<F>, Vec<F>)> {
    LinearRegression::default().fit_columns(data, y)
}

/// View the fitted parameters and make predictions with a fitted
/// linear regresssion model.
impl<F: Float> FittedLinearRegression<F> {
    /// Get the fitted weights, one per predictor
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Weights followed by the intercept
    pub fn coefficients(&self) -> Vec<F> {
        self.params
            .iter()
            .copied()
            .chain(std::iter::once(self.intercept))
            .collect()
    }

    /// Coefficients labelled by their predictor, the intercept is labelled `Constant`
    pub fn coefficient_table(&self) -> Vec<(String, F)> {
        self.feature_names
            .iter()
            .cloned()
            .chain(std::iter::once(INTERCEPT_NAME.to_string()))
            .zip(self.coefficients())
            .collect()
    }

    /// Descriptions of every predictor followed by the response
    pub fn summary(&self) -> &[VariableSummary<F>] {
        &self.summary
    }

    /// Fitted values of the training samples
    pub fn ycap(&self) -> &Array1<F> {
        &self.ycap
    }

    /// Observed minus fitted values of the training samples
    pub fn residuals(&self) -> Array1<F> {
        &self.targets - &self.ycap
    }

    /// Coefficient of determination on the training samples
    pub fn r2(&self) -> F {
        self.ycap.r2(&self.targets)
    }

    /// Decompose the variance of the response into regression and residual parts
    pub fn anova(&self) -> AnovaTable<F> {
        AnovaTable::new(&self.targets, &self.ycap, self.params.len())
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn nsamples(&self) -> usize {
        self.targets.len()
    }

    /// Split into `(summary, params, ycap)` with the intercept as last parameter
    pub fn into_parts(self) -> (Vec<VariableSummary<F>>, Vec<F>, Vec<F>) {
        let params = self.coefficients();
        (self.summary, params, self.ycap.to_vec())
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to linear model
    /// learned from the training data distribution.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.params.len(),
            "The number of features must match the number of fitted parameters."
        );

        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
