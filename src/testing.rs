//! Testing utilities.
//!
//! Seeded synthetic datasets and float assertions shared by unit tests,
//! integration tests and benchmarks.
//!
//! ```
//! use linreg_descent::testing::linear_dataset;
//!
//! let (x, y) = linear_dataset(100, &[2.0, -1.0], 0.5, 0.0, 42);
//! assert_eq!(x.dim(), (100, 2));
//! assert_eq!(y.len(), 100);
//! ```

use ndarray::{Array1, Array2, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default tolerance for floating point comparisons of O(1) values.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Generate `y = X · weights + bias + noise` with features drawn from `[-1, 1)`.
///
/// `noise` is the half-width of a uniform perturbation added to every target;
/// pass `0.0` for a noiseless dataset. The same seed always yields the same data.
pub fn linear_dataset(
    n_rows: usize,
    weights: &[f64],
    bias: f64,
    noise: f64,
    seed: u64,
) -> (Array2<f64>, Array1<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n_features = weights.len();

    let x: Array2<f64> =
        Array2::from_shape_simple_fn((n_rows, n_features), || rng.gen_range(-1.0..1.0));

    let w = ArrayView1::from(weights);
    let mut y = x.dot(&w) + bias;
    if noise > 0.0 {
        y.mapv_inplace(|v| v + rng.gen_range(-noise..noise));
    }

    (x, y)
}

/// Single-feature variant of [`linear_dataset`]: `y = w * x + b + noise`.
pub fn univariate_dataset(
    n_rows: usize,
    w: f64,
    b: f64,
    noise: f64,
    seed: u64,
) -> (Array1<f64>, Array1<f64>) {
    let (x, y) = linear_dataset(n_rows, &[w], b, noise, seed);
    (x.column(0).to_owned(), y)
}

/// Assert that two arrays are approximately equal element-wise.
///
/// # Panics
///
/// Panics if lengths differ or any element differs by more than tolerance.
pub fn assert_slice_approx_eq(
    actual: ArrayView1<'_, f64>,
    expected: ArrayView1<'_, f64>,
    tolerance: f64,
    context: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{context}[{i}]: {a} ≠ {e} (diff={diff}, tolerance={tolerance})"
        );
    }
}
