//! Linear model data structure and prediction.

use approx::AbsDiffEq;
use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

use crate::error::{ensure_len, Result};

/// Linear regression model (weights + bias).
///
/// ```text
/// output = features · weights + bias
/// ```
///
/// A univariate model is simply a model with one weight.
///
/// # Example
///
/// ```
/// use linreg_descent::LinearModel;
/// use ndarray::array;
///
/// // y = 0.5 * x0 + 0.3 * x1 + 0.1
/// let model = LinearModel::new(array![0.5, 0.3], 0.1);
///
/// assert_eq!(model.n_features(), 2);
/// assert_eq!(model.weight(1), 0.3);
/// assert!((model.predict_row(&[2.0, 3.0]).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// One coefficient per feature.
    weights: Array1<f64>,
    /// Intercept.
    bias: f64,
}

impl LinearModel {
    /// Create a model from weights and bias.
    pub fn new(weights: Array1<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Create a zero-initialized model.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias: 0.0,
        }
    }

    /// Create a single-feature model `f(x) = w * x + b`.
    pub fn univariate(w: f64, b: f64) -> Self {
        Self {
            weights: Array1::from_elem(1, w),
            bias: b,
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// All weights as a view.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Weight for a single feature.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn set_bias(&mut self, value: f64) {
        self.bias = value;
    }

    /// Consume the model, returning `(weights, bias)`.
    pub fn into_parts(self) -> (Array1<f64>, f64) {
        (self.weights, self.bias)
    }

    /// Move the parameters one step against a gradient.
    ///
    /// Callers guarantee `dj_dw.len() == n_features()`.
    pub(crate) fn descend(&mut self, alpha: f64, dj_dw: ArrayView1<'_, f64>, dj_db: f64) {
        debug_assert_eq!(dj_dw.len(), self.n_features());
        Zip::from(&mut self.weights)
            .and(&dj_dw)
            .for_each(|w, &g| *w -= alpha * g);
        self.bias -= alpha * dj_db;
    }

    /// Predict for a single row.
    ///
    /// # Errors
    ///
    /// Returns [`DescentError::ShapeMismatch`](crate::DescentError::ShapeMismatch)
    /// if the row does not have one value per feature.
    pub fn predict_row(&self, features: &[f64]) -> Result<f64> {
        ensure_len("features", self.n_features(), features.len())?;
        Ok(features
            .iter()
            .zip(self.weights.iter())
            .fold(self.bias, |acc, (&x, &w)| acc + x * w))
    }

    /// Predict for a batch of rows (one row per example).
    ///
    /// # Errors
    ///
    /// Returns [`DescentError::ShapeMismatch`](crate::DescentError::ShapeMismatch)
    /// if the number of columns differs from the number of features.
    pub fn predict(&self, data: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        ensure_len("features", self.n_features(), data.ncols())?;
        Ok(data.dot(&self.weights) + self.bias)
    }
}

impl AbsDiffEq for LinearModel {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.bias.abs_diff_eq(&other.bias, epsilon)
            && self.weights.abs_diff_eq(&other.weights, epsilon)
    }
}
