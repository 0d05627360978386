//! Least squares solvers
//!
//! Both solvers find the `b` minimizing `||X b - y||_2` for a design matrix with at least as
//! many rows as columns and report a rank deficient design as `SingularMatrix`. Rank is
//! judged per column: a column whose component orthogonal to the previous columns is below
//! `tolerance` relative to the column itself counts as linearly dependent.
#![allow(non_snake_case)]
use linfa_linalg::cholesky::Cholesky;
use linfa_linalg::qr::QRInto;
use linfa_linalg::triangular::{SolveTriangularInplace, UPLO};
use ndarray::{s, Array1, ArrayBase, Axis, Data, Ix1, Ix2};
use tracing::{debug, trace};

use crate::error::{RegressionError, Result};
use crate::hyperparams::Solver;
use crate::Float;

/// Solve the least squares problem with the selected solver
pub fn solve_least_squares<F, D1, D2>(
    X: &ArrayBase<D1, Ix2>,
    y: &ArrayBase<D2, Ix1>,
    solver: Solver,
    tolerance: F,
) -> Result<Array1<F>>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    let (n_samples, n_params) = X.dim();
    if n_samples < n_params {
        return Err(RegressionError::SingularMatrix(format!(
            "{} samples cannot determine {} coefficients",
            n_samples, n_params
        )));
    }

    match solver {
        Solver::NormalEquations => solve_normal_equations(X, y, tolerance),
        Solver::Qr => solve_qr(X, y, tolerance),
        Solver::Auto => match solve_normal_equations(X, y, tolerance) {
            Err(RegressionError::SingularMatrix(reason)) => {
                debug!("normal equations rejected ({}), retrying with QR", reason);
                solve_qr(X, y, tolerance)
            }
            res => res,
        },
    }
}

/// Solve `XᵀX b = Xᵀy` with a Cholesky factorisation of `XᵀX`
///
/// The squared pivot `L[j, j]²` of column `j` is the part of `XᵀX[j, j]` not explained by
/// the previous columns, it has to exceed `tolerance * XᵀX[j, j]`.
pub fn solve_normal_equations<F, D1, D2>(
    X: &ArrayBase<D1, Ix2>,
    y: &ArrayBase<D2, Ix1>,
    tolerance: F,
) -> Result<Array1<F>>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    let XtX = X.t().dot(X);
    trace!(n_params = XtX.nrows(), "factorising normal equations");

    let L = XtX.cholesky()?;
    check_pivots(L.diag().mapv(|l| l * l), XtX.diag().to_owned(), tolerance)?;

    let mut b = X.t().dot(y).insert_axis(Axis(1));
    L.solve_triangular_inplace(&mut b, UPLO::Lower)?;
    L.t().solve_triangular_inplace(&mut b, UPLO::Upper)?;

    Ok(b.remove_axis(Axis(1)))
}

/// Solve the least squares problem with a thin QR factorisation of `X`
///
/// `|R[j, j]|` is the norm of column `j` orthogonal to the previous columns, it has to
/// exceed `tolerance` times the norm of the column.
pub fn solve_qr<F, D1, D2>(
    X: &ArrayBase<D1, Ix2>,
    y: &ArrayBase<D2, Ix1>,
    tolerance: F,
) -> Result<Array1<F>>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    let (n_samples, n_params) = X.dim();
    trace!(n_samples, n_params, "factorising design matrix");

    let (Q, R) = X.to_owned().qr_into()?.into_decomp();
    let R = R.slice_move(s![..n_params, ..]);
    let norms = X
        .columns()
        .into_iter()
        .map(|col| col.dot(&col).sqrt())
        .collect::<Array1<_>>();
    check_pivots(R.diag().mapv(|r| r.abs()), norms, tolerance)?;

    let mut b = Q.t().dot(y).insert_axis(Axis(1));
    R.solve_triangular_inplace(&mut b, UPLO::Upper)?;

    Ok(b.remove_axis(Axis(1)))
}

// a pivot which does not exceed its scaled reference marks a linearly dependent column
fn check_pivots<F: Float>(pivots: Array1<F>, reference: Array1<F>, tolerance: F) -> Result<()> {
    match pivots
        .iter()
        .zip(reference.iter())
        .position(|(p, r)| !(*p > tolerance * *r))
    {
        Some(j) => Err(RegressionError::SingularMatrix(format!(
            "column {} is linearly dependent on the previous columns",
            j
        ))),
        None => Ok(()),
    }
}
