//! Analysis of variance of a fitted linear regression
//!
//! The total sum of squares of the response around its mean is split into the part
//! explained by the regression and the residual part. Their ratio of mean squares is tested
//! against the F distribution with `(p, n - p - 1)` degrees of freedom.
use ndarray::{ArrayBase, Data, Ix1};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use std::fmt;

use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// ANOVA table of a linear regression with intercept
///
/// Values which need a residual degree of freedom are `None` for a model that interpolates
/// its training samples exactly (`n = p + 1`).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaTable<F> {
    pub ss_regression: F,
    pub ss_residual: F,
    pub ss_total: F,
    pub df_regression: usize,
    pub df_residual: usize,
    pub df_total: usize,
    pub ms_regression: F,
    pub ms_residual: Option<F>,
    pub f_statistic: Option<F>,
    pub f_p_value: Option<F>,
    pub r2: F,
    pub adjusted_r2: Option<F>,
}

impl<F: Float> AnovaTable<F> {
    /// Compute the table from observed targets, fitted values and the number of predictors
    ///
    /// The fitted values must come from a least squares fit with intercept, otherwise the
    /// regression and residual sums of squares do not add up to the total.
    pub fn new<D1, D2>(
        targets: &ArrayBase<D1, Ix1>,
        ycap: &ArrayBase<D2, Ix1>,
        n_features: usize,
    ) -> Self
    where
        D1: Data<Elem = F>,
        D2: Data<Elem = F>,
    {
        let n = targets.len();
        let mean = targets.sum() / F::cast(n);

        let ss_total = targets.mapv(|y| (y - mean) * (y - mean)).sum();
        let ss_residual = targets
            .iter()
            .zip(ycap.iter())
            .map(|(y, yhat)| (*y - *yhat) * (*y - *yhat))
            .sum::<F>();
        let ss_regression = (ss_total - ss_residual).max(F::zero());

        let df_regression = n_features;
        let df_total = n.saturating_sub(1);
        let df_residual = df_total.saturating_sub(df_regression);

        let ms_regression = ss_regression / F::cast(df_regression.max(1));
        let ms_residual = if df_residual > 0 {
            Some(ss_residual / F::cast(df_residual))
        } else {
            None
        };

        let (f_statistic, f_p_value) = match ms_residual {
            Some(ms) if ms > F::zero() => {
                let f = ms_regression / ms;
                (Some(f), Some(f_test(f, df_regression, df_residual)))
            }
            Some(_) => (Some(F::infinity()), Some(F::zero())),
            None => (None, None),
        };

        let r2 = if ss_total > F::zero() {
            ss_regression / ss_total
        } else {
            F::one()
        };
        let adjusted_r2 = if df_residual > 0 {
            Some(F::one() - (F::one() - r2) * F::cast(df_total) / F::cast(df_residual))
        } else {
            None
        };

        AnovaTable {
            ss_regression,
            ss_residual,
            ss_total,
            df_regression,
            df_residual,
            df_total,
            ms_regression,
            ms_residual,
            f_statistic,
            f_p_value,
            r2,
            adjusted_r2,
        }
    }
}

// upper tail of F(d1, d2)
fn f_test<F: Float>(f: F, d1: usize, d2: usize) -> F {
    match FisherSnedecor::new(d1 as f64, d2 as f64) {
        Ok(dist) => F::from_f64_lossy((1. - dist.cdf(f.to_f64_lossy())).max(0.)),
        Err(_) => F::nan(),
    }
}

impl<F: Float> fmt::Display for AnovaTable<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn opt<F: Float>(x: Option<F>) -> String {
            x.map(|x| format!("{:.4}", x)).unwrap_or_else(|| "-".to_string())
        }

        writeln!(
            f,
            "{:<12}{:>6}{:>16}{:>16}{:>12}{:>12}",
            "Source", "df", "SS", "MS", "F", "p-value"
        )?;
        writeln!(
            f,
            "{:<12}{:>6}{:>16.4}{:>16.4}{:>12}{:>12}",
            "Regression",
            self.df_regression,
            self.ss_regression,
            self.ms_regression,
            opt(self.f_statistic),
            opt(self.f_p_value)
        )?;
        writeln!(
            f,
            "{:<12}{:>6}{:>16.4}{:>16}",
            "Residual",
            self.df_residual,
            self.ss_residual,
            opt(self.ms_residual)
        )?;
        write!(
            f,
            "{:<12}{:>6}{:>16.4}",
            "Total", self.df_total, self.ss_total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn decomposes_sum_of_squares() {
        // least squares line through (0, 1), (1, 3), (2, 4), (3, 8) is 2.2x + 0.7
        let y = array![1., 3., 4., 8.];
        let ycap = array![0.7, 2.9, 5.1, 7.3];

        let table = AnovaTable::new(&y, &ycap, 1);
        assert_abs_diff_eq!(table.ss_total, 26., epsilon = 1e-10);
        assert_abs_diff_eq!(table.ss_residual, 1.8, epsilon = 1e-10);
        assert_abs_diff_eq!(table.ss_regression, 24.2, epsilon = 1e-10);
        assert_eq!(
            (table.df_regression, table.df_residual, table.df_total),
            (1, 2, 3)
        );
        assert_abs_diff_eq!(table.ms_residual.unwrap(), 0.9, epsilon = 1e-10);

        let f: f64 = table.f_statistic.unwrap();
        assert_abs_diff_eq!(f, 24.2 / 0.9, epsilon = 1e-8);
        // F(1, 2) upper tail equals the two sided t test with 2 degrees of freedom
        let p = table.f_p_value.unwrap();
        assert_abs_diff_eq!(p, 1. - (f / (2. + f)).sqrt(), epsilon = 1e-6);
        assert_abs_diff_eq!(table.r2, 24.2 / 26., epsilon = 1e-10);
        assert_abs_diff_eq!(
            table.adjusted_r2.unwrap(),
            1. - (1.8 / 26.) * 3. / 2.,
            epsilon = 1e-10
        );
    }

    #[test]
    fn exact_fit_has_no_residual_degrees_of_freedom() {
        let y = array![1., 2.];
        let table = AnovaTable::new(&y, &y, 1);

        assert_eq!(table.df_residual, 0);
        assert!(table.ms_residual.is_none());
        assert!(table.f_statistic.is_none());
        assert!(table.f_p_value.is_none());
        assert!(table.adjusted_r2.is_none());
        assert_abs_diff_eq!(table.r2, 1.);
    }

    #[test]
    fn perfect_fit_with_spare_samples() {
        let y = array![1., 2., 3., 4.];
        let table = AnovaTable::new(&y, &y, 1);

        assert_eq!(table.f_statistic, Some(f64::INFINITY));
        assert_eq!(table.f_p_value, Some(0.));
    }

    #[test]
    fn empty_targets_have_no_degrees_of_freedom() {
        let y = ndarray::Array1::<f64>::zeros(0);
        let table = AnovaTable::new(&y, &y, 1);

        assert_eq!((table.df_total, table.df_residual), (0, 0));
        assert!(table.f_statistic.is_none());
    }

    #[test]
    fn renders_three_rows() {
        let y = array![1., 3., 4., 8.];
        let ycap = array![0.7, 2.9, 5.1, 7.3];
        let rendered = AnovaTable::new(&y, &ycap, 1).to_string();

        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Regression"));
        assert!(lines[2].starts_with("Residual"));
        assert!(lines[3].starts_with("Total"));
        assert!(lines[3].contains("26.0000"));
    }
}
