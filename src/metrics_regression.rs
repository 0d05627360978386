//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables.

use ndarray::{ArrayBase, Data, Ix1};

use crate::Float;

/// Regression metrices trait
///
/// `self` holds the predictions, `compare_to` the ground truth. Both have to be of equal
/// length.
pub trait Regression<F: Float> {
    /// Maximal error between two continuous variables
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F;
    /// Mean error between two continuous variables
    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F;
    /// Mean squared error between two continuous variables
    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// To evaluate the accuracy of a prediction, use
    /// ```ignore
    /// prediction.r2(&ground_truth)
    /// ```
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F;
    /// Same as R-Squared but with biased variance
    fn explained_variance<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F;
}

impl<F: Float, S: Data<Elem = F>> Regression<F> for ArrayBase<S, Ix1> {
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F {
        (self - compare_to)
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max)
    }

    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F {
        (self - compare_to).mapv(|x| x.abs()).sum() / F::cast(self.len())
    }

    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F {
        (self - compare_to).mapv(|x| x * x).sum() / F::cast(self.len())
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken of `compare_to`, the ground truth
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F {
        let mean = compare_to.sum() / F::cast(compare_to.len());
        let ss_res = (self - compare_to).mapv(|x| x * x).sum();
        let ss_tot = compare_to.mapv(|x| (x - mean) * (x - mean)).sum();

        if ss_tot > F::zero() {
            F::one() - ss_res / ss_tot
        } else if ss_res > F::zero() {
            F::neg_infinity()
        } else {
            F::one()
        }
    }

    fn explained_variance<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> F {
        let n = F::cast(compare_to.len());
        let diff = compare_to - self;
        let mean_error = diff.sum() / n;
        let mean = compare_to.sum() / n;

        let var_error = diff.mapv(|x| (x - mean_error) * (x - mean_error)).sum();
        let var_truth = compare_to.mapv(|x| (x - mean) * (x - mean)).sum();

        if var_truth > F::zero() {
            F::one() - var_error / var_truth
        } else if var_error > F::zero() {
            F::neg_infinity()
        } else {
            F::one()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Regression;
    use approx::assert_abs_diff_eq;
    use ndarray::prelude::*;

    #[test]
    fn test_same() {
        let a: Array1<f32> = Array1::linspace(0., 1., 100);

        assert_abs_diff_eq!(a.max_error(&a), 0.0f32);
        assert_abs_diff_eq!(a.mean_absolute_error(&a), 0.0f32);
        assert_abs_diff_eq!(a.mean_squared_error(&a), 0.0f32);
        assert_abs_diff_eq!(a.r2(&a), 1.0f32);
        assert_abs_diff_eq!(a.explained_variance(&a), 1.0f32);
    }

    #[test]
    fn test_max_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.max_error(&b), 0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_mean_errors() {
        let prediction = array![0.1, 0.3, 0.2, 0.5, 0.7];
        let truth = array![0.0, 0.1, 0.2, 0.3, 0.4];

        assert_abs_diff_eq!(prediction.mean_absolute_error(&truth), 0.16, epsilon = 1e-10);
        assert_abs_diff_eq!(prediction.mean_squared_error(&truth), 0.036, epsilon = 1e-10);
    }

    #[test]
    fn test_r2_and_explained_variance() {
        let prediction = array![0.1, 0.3, 0.2, 0.5, 0.7];
        let truth = array![0.0, 0.1, 0.2, 0.3, 0.4];

        assert_abs_diff_eq!(prediction.r2(&truth), -0.8, epsilon = 1e-10);
        // errors 0.1, 0.2, 0.0, 0.2, 0.3 scatter by 0.052 around their mean, the truth by 0.1
        assert_abs_diff_eq!(prediction.explained_variance(&truth), 0.48, epsilon = 1e-10);
    }

    #[test]
    fn test_constant_truth() {
        let truth: Array1<f64> = array![2.0, 2.0, 2.0];

        assert_abs_diff_eq!(truth.r2(&truth), 1.0);
        assert!(array![1.0, 2.0, 3.0].r2(&truth).is_infinite());
    }
}
