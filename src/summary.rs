//! Descriptive statistics of predictors and response
//!
//! Every column passed to a fit is described by its range, its first two moments and its
//! linear relation to the response. The response itself is described last.
use ndarray::{ArrayBase, Data, Ix1};
use std::collections::HashMap;

use crate::correlation::{correlation_p_value, covariance, pearson_correlation};
use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Key names of a summary row, in rendering order
pub const SUMMARY_KEYS: [&str; 9] = [
    "count",
    "min",
    "max",
    "mean",
    "variance",
    "std",
    "covariance",
    "r",
    "pr",
];

/// Description of a single column and its relation to the response
///
/// `pr` is the two-sided p-value of the Pearson correlation `r` under Student's t
/// distribution with `count - 2` degrees of freedom.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSummary<F> {
    pub name: String,
    pub count: usize,
    pub min: F,
    pub max: F,
    pub mean: F,
    pub variance: F,
    pub std: F,
    pub covariance: F,
    pub r: F,
    pub pr: F,
}

impl<F: Float> VariableSummary<F> {
    /// Describe `column` against `response`
    ///
    /// Both samples need the same length and at least two observations.
    pub fn describe<D1, D2>(
        name: &str,
        column: &ArrayBase<D1, Ix1>,
        response: &ArrayBase<D2, Ix1>,
    ) -> Result<Self>
    where
        D1: Data<Elem = F>,
        D2: Data<Elem = F>,
    {
        let count = column.len();
        if response.len() != count {
            return Err(RegressionError::DimensionMismatch {
                column: 0,
                expected: response.len(),
                found: count,
            });
        }
        if count < 2 {
            return Err(RegressionError::NotEnoughSamples(count));
        }
        let (min, max) = column
            .iter()
            .fold((F::infinity(), F::neg_infinity()), |(lo, hi), x| {
                (lo.min(*x), hi.max(*x))
            });
        let mean = column.iter().copied().sum::<F>() / F::cast(count);
        let variance = column
            .iter()
            .map(|x| (*x - mean) * (*x - mean))
            .sum::<F>()
            / F::cast(count - 1);
        let covariance = covariance(column, response);

        let r = pearson_correlation(column, response).map_err(|_| {
            RegressionError::InvalidInput(format!(
                "column {} or the response has zero variance",
                name
            ))
        })?;
        let pr = correlation_p_value(r, count)?;

        let summary = VariableSummary {
            name: name.to_string(),
            count,
            min,
            max,
            mean,
            variance,
            std: variance.sqrt(),
            covariance,
            r,
            pr,
        };
        summary.ensure_finite()?;

        Ok(summary)
    }

    /// Statistic values keyed by name, in the order of `SUMMARY_KEYS`
    pub fn fields(&self) -> [(&'static str, F); 9] {
        [
            ("count", F::cast(self.count)),
            ("min", self.min),
            ("max", self.max),
            ("mean", self.mean),
            ("variance", self.variance),
            ("std", self.std),
            ("covariance", self.covariance),
            ("r", self.r),
            ("pr", self.pr),
        ]
    }

    /// Render the row as a string to float mapping
    pub fn to_map(&self) -> HashMap<String, F> {
        self.fields()
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    fn ensure_finite(&self) -> Result<()> {
        match self.fields().iter().find(|(_, value)| !value.is_finite()) {
            Some((key, value)) => Err(RegressionError::InvalidInput(format!(
                "statistic {} of column {} is {}",
                key, self.name, value
            ))),
            None => Ok(()),
        }
    }
}

/// Describe every predictor of the dataset, followed by the response
pub fn describe<F: Float>(dataset: &Dataset<F>) -> Result<Vec<VariableSummary<F>>> {
    let targets = dataset.targets();

    let mut summary = dataset
        .feature_names()
        .iter()
        .enumerate()
        .map(|(j, name)| VariableSummary::describe(name, &dataset.feature(j), &targets))
        .collect::<Result<Vec<_>>>()?;
    summary.push(VariableSummary::describe(
        dataset.target_name(),
        &targets,
        &targets,
    )?);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn describes_a_column() {
        let x = array![1., 2., 3., 4., 5.];
        let y = array![2., 4., 6., 8., 10.];

        let s = VariableSummary::describe("x", &x, &y).unwrap();
        assert_eq!(s.count, 5);
        assert_abs_diff_eq!(s.min, 1.);
        assert_abs_diff_eq!(s.max, 5.);
        assert_abs_diff_eq!(s.mean, 3.);
        assert_abs_diff_eq!(s.variance, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.std, 2.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.covariance, 5., epsilon = 1e-12);
        assert_abs_diff_eq!(s.r, 1., epsilon = 1e-12);
        assert_abs_diff_eq!(s.pr, 0.);
    }

    #[test]
    fn response_is_described_last() {
        let dataset = Dataset::from_columns(&[vec![1., 2., 3., 4.], vec![1., 0., 1., 3.]], &[
            3., 1., 4., 1.,
        ])
        .unwrap()
        .with_target_name("price");

        let summary = describe(&dataset).unwrap();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].name, "x0");
        assert_eq!(summary[2].name, "price");

        let response = &summary[2];
        assert_abs_diff_eq!(response.r, 1.);
        assert_abs_diff_eq!(response.pr, 0.);
        assert_abs_diff_eq!(response.covariance, response.variance, epsilon = 1e-12);
    }

    #[test]
    fn map_uses_dashboard_keys() {
        let s = VariableSummary::describe("x", &array![1., 2., 4.], &array![1., 3., 2.]).unwrap();
        let map = s.to_map();

        assert_eq!(map.len(), SUMMARY_KEYS.len());
        for key in SUMMARY_KEYS.iter() {
            assert!(map.contains_key(*key));
        }
        assert_abs_diff_eq!(map["count"], 3.);
        assert_abs_diff_eq!(map["mean"], 7. / 3., epsilon = 1e-12);
    }

    #[test]
    fn short_samples_are_rejected() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(
            VariableSummary::describe("x", &empty, &empty),
            Err(RegressionError::NotEnoughSamples(0))
        );
        assert_eq!(
            VariableSummary::describe("x", &array![1.], &array![2.]),
            Err(RegressionError::NotEnoughSamples(1))
        );
        assert!(VariableSummary::describe("x", &array![1., 2.], &array![2.])
            .unwrap_err()
            .is_dimension_mismatch());
    }

    #[test]
    fn two_sample_column_has_perfect_correlation() {
        let s = VariableSummary::describe(
            "x",
            &array![13.9608, 25.6444],
            &array![-49.0064, -77.751],
        )
        .unwrap();

        assert_eq!(s.r, -1.);
        assert_eq!(s.pr, 0.);
    }

    #[test]
    fn zero_variance_column_is_invalid() {
        let dataset = Dataset::from_columns(&[vec![2., 2., 2.]], &[1., 2., 3.]).unwrap();

        assert!(matches!(
            describe(&dataset),
            Err(RegressionError::InvalidInput(_))
        ));
    }
}
