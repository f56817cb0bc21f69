//! Multivariate engine against reference runs and synthetic data.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linreg_descent::multivariate::{compute_cost, compute_gradient, gradient_descent, predict};
use linreg_descent::testing::{assert_slice_approx_eq, linear_dataset};
use linreg_descent::DescentError;
use ndarray::{array, Array1};
use rstest::rstest;

use crate::common::ReferenceCase;

#[test]
fn gradient_recomputed_row_by_row() {
    let x = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0]];
    let y = array![2.0, 4.0, 6.0];
    let w = array![0.0, 0.0];

    let (dj_dw, dj_db) = compute_gradient(x.view(), y.view(), w.view(), 0.0).unwrap();

    let errors: Vec<f64> = x
        .rows()
        .into_iter()
        .zip(y.iter())
        .map(|(row, &t)| row.dot(&w) - t)
        .collect();
    let m = errors.len() as f64;
    let expected_dw: Array1<f64> = (0..2)
        .map(|j| errors.iter().enumerate().map(|(i, e)| e * x[[i, j]]).sum::<f64>() / m)
        .collect();
    let expected_db = errors.iter().sum::<f64>() / m;

    assert_slice_approx_eq(dj_dw.view(), expected_dw.view(), 1e-12, "dj_dw");
    assert_abs_diff_eq!(dj_db, expected_db, epsilon = 1e-12);
}

#[test]
fn housing_reference_run() {
    let case = ReferenceCase::load("housing_multivariate");
    let (x, y, w_in) = (case.x(), case.y(), case.w_in());

    let (w, b) = gradient_descent(
        x.view(),
        y.view(),
        w_in.view(),
        case.b_in,
        case.alpha,
        case.num_iters,
        compute_gradient,
    )
    .unwrap();

    let tol = case.expected.tolerance;
    assert_slice_approx_eq(w.view(), Array1::from(case.expected.w.clone()).view(), tol, "w");
    assert_abs_diff_eq!(b, case.expected.b, epsilon = tol);

    let final_cost = compute_cost(x.view(), y.view(), w.view(), b).unwrap();
    assert_relative_eq!(
        final_cost,
        case.expected.final_cost.unwrap(),
        max_relative = 1e-9
    );

    let preds = predict(x.view(), w.view(), b).unwrap();
    let expected_preds = Array1::from(case.expected.predictions.clone().unwrap());
    assert_slice_approx_eq(preds.view(), expected_preds.view(), 1e-6, "predictions");

    // Initial weights stay as the caller left them.
    assert!(w_in.iter().all(|&v| v == 0.0));
}

#[rstest]
#[case(&[2.0, -1.0], 0.5)]
#[case(&[0.3, 1.7, -2.2, 4.0], -1.0)]
fn long_run_recovers_generating_parameters(#[case] true_w: &[f64], #[case] true_b: f64) {
    let (x, y) = linear_dataset(200, true_w, true_b, 0.0, 42);
    let w_in = Array1::<f64>::zeros(true_w.len());

    let (w, b) =
        gradient_descent(x.view(), y.view(), w_in.view(), 0.0, 0.1, 10_000, compute_gradient)
            .unwrap();

    assert_slice_approx_eq(w.view(), Array1::from(true_w.to_vec()).view(), 1e-4, "weights");
    assert_abs_diff_eq!(b, true_b, epsilon = 1e-4);
}

#[test]
fn shape_errors_are_typed() {
    let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let y = array![1.0, 2.0, 3.0];

    let err = gradient_descent(
        x.view(),
        array![1.0, 2.0].view(),
        array![0.0, 0.0].view(),
        0.0,
        0.1,
        10,
        compute_gradient,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DescentError::ShapeMismatch {
            what: "targets",
            expected: 3,
            got: 2
        }
    );

    let err = compute_cost(x.view(), y.view(), array![0.0, 0.0, 0.0].view(), 0.0).unwrap_err();
    assert!(matches!(err, DescentError::ShapeMismatch { what: "weights", .. }));
}
