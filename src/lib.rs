//! linreg-descent: textbook gradient descent for linear regression.
//!
//! Two independent engines, each with a gradient routine and a descent driver:
//!
//! - [`univariate`]: one input feature, `f(x) = w * x + b`
//! - [`multivariate`]: `n` input features, `f(x) = x · w + b`
//!
//! Both minimize the mean squared error cost `J = 1/(2m) Σ (f(x_i) - y_i)²`
//! with full-batch updates for a fixed number of iterations. The descent
//! drivers take the gradient routine as a parameter, so any function with the
//! same signature can be substituted.
//!
//! # Key Types
//!
//! - [`LinearModel`]: weights + bias with prediction
//! - [`GradientDescentTrainer`] / [`DescentParams`]: configured training with
//!   cost history and logging
//! - [`DescentError`]: shape and configuration errors
//!
//! # Example
//!
//! ```
//! use linreg_descent::univariate;
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let (dj_dw, dj_db) = univariate::compute_gradient(x.view(), y.view(), 0.0, 0.0).unwrap();
//! assert!((dj_dw + 28.0 / 3.0).abs() < 1e-12);
//! assert!((dj_db + 4.0).abs() < 1e-12);
//! ```

// Re-export approx traits for users who want to compare models
pub use approx;

pub mod error;
pub mod model;
pub mod multivariate;
pub mod testing;
pub mod training;
pub mod univariate;

pub use error::{ConfigError, DescentError, Result};
pub use model::LinearModel;
pub use training::{DescentParams, GradientDescentTrainer, TrainOutput, TrainingLogger, Verbosity};
