//! Univariate gradient engine.
//!
//! Model: `f(x) = w * x + b` over a single input feature.
//!
//! ```text
//! dj_dw = 1/m * Σ (f(x_i) - y_i) * x_i
//! dj_db = 1/m * Σ (f(x_i) - y_i)
//! ```
//!
//! # Example
//!
//! ```
//! use linreg_descent::univariate::{compute_gradient, gradient_descent};
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0];
//! let y = array![300.0, 500.0];
//!
//! let (w, b) = gradient_descent(x.view(), y.view(), 0.0, 0.0, 1.0e-2, 10_000, compute_gradient)
//!     .unwrap();
//! assert!((w - 200.0).abs() < 0.1);
//! assert!((b - 100.0).abs() < 0.1);
//! ```

use ndarray::{Array1, ArrayView1};
use tracing::trace;

use crate::error::{ensure_len, ensure_non_empty, Result};

/// Validate a feature vector against its targets.
fn check_inputs(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<()> {
    ensure_non_empty(x.len())?;
    ensure_len("targets", x.len(), y.len())
}

/// Compute the mean-squared-error gradient with respect to `w` and `b`.
///
/// Returns `(dj_dw, dj_db)`. Inputs are left untouched.
///
/// # Errors
///
/// - [`DescentError::EmptyDataset`](crate::DescentError::EmptyDataset) if `x` is empty
/// - [`DescentError::ShapeMismatch`](crate::DescentError::ShapeMismatch) if `x` and `y` differ in length
pub fn compute_gradient(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    w: f64,
    b: f64,
) -> Result<(f64, f64)> {
    check_inputs(x, y)?;

    let (sum_dw, sum_db) = x
        .iter()
        .zip(y.iter())
        .fold((0.0f64, 0.0f64), |(dw, db), (&x_i, &y_i)| {
            let err = w * x_i + b - y_i;
            (dw + err * x_i, db + err)
        });

    let m = x.len() as f64;
    Ok((sum_dw / m, sum_db / m))
}

/// Run `num_iters` steps of full-batch gradient descent.
///
/// Each step asks `gradient_function` for `(dj_dw, dj_db)` at the current
/// parameters and moves against it:
///
/// ```text
/// w ← w - alpha * dj_dw
/// b ← b - alpha * dj_db
/// ```
///
/// There is no early termination: exactly `num_iters` steps are taken. Any
/// function with the signature of [`compute_gradient`] can be injected, which
/// lets the same driver descend alternative cost surfaces.
///
/// # Errors
///
/// Shape errors are reported before the first step; errors returned by
/// `gradient_function` abort the run.
pub fn gradient_descent<G>(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    w_in: f64,
    b_in: f64,
    alpha: f64,
    num_iters: usize,
    mut gradient_function: G,
) -> Result<(f64, f64)>
where
    G: FnMut(ArrayView1<'_, f64>, ArrayView1<'_, f64>, f64, f64) -> Result<(f64, f64)>,
{
    check_inputs(x, y)?;

    let mut w = w_in;
    let mut b = b_in;

    for iteration in 0..num_iters {
        let (dj_dw, dj_db) = gradient_function(x, y, w, b)?;

        w -= alpha * dj_dw;
        b -= alpha * dj_db;

        trace!(iteration, w, b, dj_dw, dj_db, "univariate descent step");
    }

    Ok((w, b))
}

/// Mean squared error cost `J(w, b) = 1/(2m) * Σ (f(x_i) - y_i)²`.
pub fn compute_cost(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, w: f64, b: f64) -> Result<f64> {
    check_inputs(x, y)?;

    let sum_sq: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&x_i, &y_i)| {
            let err = w * x_i + b - y_i;
            err * err
        })
        .sum();

    Ok(sum_sq / (2.0 * x.len() as f64))
}

/// Predict `w * x_i + b` for every input.
pub fn predict(x: ArrayView1<'_, f64>, w: f64, b: f64) -> Array1<f64> {
    x.mapv(|x_i| w * x_i + b)
}
