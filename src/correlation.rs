//! Correlation analysis between a predictor and the response
//!
use ndarray::{ArrayBase, Data, Ix1};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{RegressionError, Result};
use crate::Float;

/// Sample covariance with `n - 1` denominator
///
/// Samples with less than two observations have an undefined covariance and yield `NaN`.
pub fn covariance<F: Float, D1: Data<Elem = F>, D2: Data<Elem = F>>(
    x: &ArrayBase<D1, Ix1>,
    y: &ArrayBase<D2, Ix1>,
) -> F {
    let n = x.len();
    let (mean_x, mean_y) = (mean(x), mean(y));

    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (*a - mean_x) * (*b - mean_y))
        .sum::<F>()
        / F::cast(n.saturating_sub(1))
}

/// Pearson correlation coefficient of two samples of equal length
///
/// Fails when one of the samples has zero variance, since the coefficient is undefined then.
pub fn pearson_correlation<F: Float, D1: Data<Elem = F>, D2: Data<Elem = F>>(
    x: &ArrayBase<D1, Ix1>,
    y: &ArrayBase<D2, Ix1>,
) -> Result<F> {
    let (mean_x, mean_y) = (mean(x), mean(y));

    let (mut sxy, mut sxx, mut syy) = (F::zero(), F::zero(), F::zero());
    for (a, b) in x.iter().zip(y.iter()) {
        let (dx, dy) = (*a - mean_x, *b - mean_y);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    // the product of the sums of squares leaves the float range long before the sums do
    let denom = sxx.sqrt() * syy.sqrt();
    if denom <= F::zero() || !denom.is_finite() {
        return Err(RegressionError::InvalidInput(
            "zero variance sample, correlation undefined".to_string(),
        ));
    }

    // two observations always lie on a line
    if x.len() == 2 {
        return Ok(sxy.signum());
    }

    // rounding may push a perfect correlation slightly outside of [-1, 1]
    let r = (sxy / denom).max(-F::one()).min(F::one());

    Ok(r)
}

/// Two-sided p-value of the hypothesis `r = 0` for `n` paired observations
///
/// The statistic `t = r * sqrt((n - 2) / (1 - r²))` follows Student's t distribution with
/// `n - 2` degrees of freedom. A perfect correlation has p-value zero.
pub fn correlation_p_value<F: Float>(r: F, n: usize) -> Result<F> {
    if (F::one() - r.abs()) <= F::epsilon() {
        return Ok(F::zero());
    }
    if n < 3 {
        return Err(RegressionError::InvalidInput(format!(
            "p-value of an imperfect correlation needs three samples, got {}",
            n
        )));
    }

    let df = (n - 2) as f64;
    let r = r.to_f64_lossy();
    let t = r * (df / (1. - r * r)).sqrt();

    let dist = StudentsT::new(0., 1., df)
        .map_err(|err| RegressionError::InvalidInput(err.to_string()))?;
    let p = 2. * (1. - dist.cdf(t.abs()));

    Ok(F::from_f64_lossy(p.max(0.).min(1.)))
}

fn mean<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix1>) -> F {
    x.iter().copied().sum::<F>() / F::cast(x.len())
}
