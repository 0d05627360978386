//! Provide traits for the fitting and prediction steps
//!
use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For
/// the regression engine this is the fitted model together with the description of every
/// variable.
pub trait Fit<F: Float> {
    type Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object>;
}

/// Predict with model into a mutable reference of targets
pub trait PredictInplace<R, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T);

    /// Create targets that `predict_inplace` works with
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model, allocating the targets
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, R, T, O> Predict<&'a R, T> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, x: &'a R) -> T {
        let mut targets = self.default_target(x);
        self.predict_inplace(x, &mut targets);
        targets
    }
}

/// Performs checking step and calls `fit` on the checked hyperparameters. If checking failed,
/// the checking error is returned instead.
impl<F, P> Fit<F> for P
where
    F: Float,
    P: ParamGuard<Error = RegressionError>,
    P::Checked: Fit<F>,
{
    type Object = <P::Checked as Fit<F>>::Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
