//! Multivariate gradient engine.
//!
//! Model: `f(x) = x · w + b` over `n` input features. The feature matrix has
//! one row per example and one column per feature.
//!
//! ```text
//! err_i     = X[i] · w + b - y_i
//! dj_dw[j]  = 1/m * Σ err_i * X[i][j]
//! dj_db     = 1/m * Σ err_i
//! ```
//!
//! # Example
//!
//! ```
//! use linreg_descent::multivariate::{compute_gradient, gradient_descent};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0]];
//! let y = array![2.0, 4.0, 6.0];
//! let w_in = array![0.0, 0.0];
//!
//! let (w, b) =
//!     gradient_descent(x.view(), y.view(), w_in.view(), 0.0, 0.05, 5_000, compute_gradient)
//!         .unwrap();
//!
//! // The caller's initial weights are untouched.
//! assert_eq!(w_in, array![0.0, 0.0]);
//! let fitted = x.dot(&w) + b;
//! assert!((fitted[2] - 6.0).abs() < 1e-3);
//! ```

use ndarray::{Array1, ArrayView1, ArrayView2, Zip};
use tracing::trace;

use crate::error::{ensure_len, ensure_non_empty, DescentError, Result};

/// Validate the feature matrix against targets and weights.
fn check_inputs(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>, n_weights: usize) -> Result<()> {
    let (n_rows, n_features) = x.dim();
    ensure_non_empty(n_rows)?;
    if n_features == 0 {
        return Err(DescentError::EmptyDataset);
    }
    ensure_len("targets", n_rows, y.len())?;
    ensure_len("weights", n_features, n_weights)
}

/// Compute the mean-squared-error gradient with respect to `w` and `b`.
///
/// Returns `(dj_dw, dj_db)` where `dj_dw` has one entry per feature column.
///
/// # Errors
///
/// - [`DescentError::EmptyDataset`] if `x` has no rows or no columns
/// - [`DescentError::ShapeMismatch`] if `y` does not have one entry per row,
///   or `w` does not have one entry per column
pub fn compute_gradient(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    w: ArrayView1<'_, f64>,
    b: f64,
) -> Result<(Array1<f64>, f64)> {
    check_inputs(x, y, w.len())?;

    let (n_rows, n_features) = x.dim();
    let mut dj_dw = Array1::<f64>::zeros(n_features);
    let mut dj_db = 0.0f64;

    for (row, &y_i) in x.rows().into_iter().zip(y.iter()) {
        let err = row.dot(&w) + b - y_i;
        dj_dw.scaled_add(err, &row);
        dj_db += err;
    }

    let m = n_rows as f64;
    dj_dw /= m;
    Ok((dj_dw, dj_db / m))
}

/// Run `num_iters` steps of full-batch gradient descent.
///
/// Works on an owned copy of `w_in`; the caller's weights are never written.
/// Each step updates every weight component and the bias:
///
/// ```text
/// w ← w - alpha * dj_dw   (element-wise)
/// b ← b - alpha * dj_db
/// ```
///
/// # Errors
///
/// Shape errors are reported before the first step. A gradient function that
/// returns `dj_dw` of the wrong length yields [`DescentError::ShapeMismatch`].
pub fn gradient_descent<G>(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    w_in: ArrayView1<'_, f64>,
    b_in: f64,
    alpha: f64,
    num_iters: usize,
    mut gradient_function: G,
) -> Result<(Array1<f64>, f64)>
where
    G: FnMut(
        ArrayView2<'_, f64>,
        ArrayView1<'_, f64>,
        ArrayView1<'_, f64>,
        f64,
    ) -> Result<(Array1<f64>, f64)>,
{
    check_inputs(x, y, w_in.len())?;

    let mut w = w_in.to_owned();
    let mut b = b_in;

    for iteration in 0..num_iters {
        let (dj_dw, dj_db) = gradient_function(x, y, w.view(), b)?;
        ensure_len("gradient", w.len(), dj_dw.len())?;

        Zip::from(&mut w)
            .and(&dj_dw)
            .for_each(|w_j, &g_j| *w_j -= alpha * g_j);
        b -= alpha * dj_db;

        trace!(iteration, b, dj_db, "multivariate descent step");
    }

    Ok((w, b))
}

/// Mean squared error cost `J(w, b) = 1/(2m) * Σ (X[i] · w + b - y_i)²`.
pub fn compute_cost(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    w: ArrayView1<'_, f64>,
    b: f64,
) -> Result<f64> {
    check_inputs(x, y, w.len())?;

    let sum_sq: f64 = x
        .rows()
        .into_iter()
        .zip(y.iter())
        .map(|(row, &y_i)| {
            let err = row.dot(&w) + b - y_i;
            err * err
        })
        .sum();

    Ok(sum_sq / (2.0 * x.nrows() as f64))
}

/// Predict `X[i] · w + b` for every row.
///
/// # Errors
///
/// Returns [`DescentError::ShapeMismatch`] if `w` does not have one entry per column.
pub fn predict(x: ArrayView2<'_, f64>, w: ArrayView1<'_, f64>, b: f64) -> Result<Array1<f64>> {
    ensure_len("weights", x.ncols(), w.len())?;
    Ok(x.dot(&w) + b)
}
