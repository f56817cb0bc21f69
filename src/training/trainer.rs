//! Configured gradient descent trainer.
//!
//! [`GradientDescentTrainer`] runs the same full-batch loop as
//! [`univariate::gradient_descent`] and [`multivariate::gradient_descent`], and
//! additionally records the cost after every iteration and reports progress
//! through [`TrainingLogger`].
//!
//! # Example
//!
//! ```
//! use linreg_descent::training::{DescentParams, GradientDescentTrainer};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
//! let y = array![3.0, 5.0, 7.0, 9.0, 11.0]; // y = 2x + 1
//!
//! let params = DescentParams::builder()
//!     .learning_rate(0.05)
//!     .n_iters(5_000)
//!     .build()
//!     .unwrap();
//! let trainer = GradientDescentTrainer::new(params);
//!
//! let output = trainer.train(x.view(), y.view(), array![0.0].view(), 0.0).unwrap();
//! assert_eq!(output.cost_history.len(), 5_000);
//! assert!((output.model.weight(0) - 2.0).abs() < 1e-3);
//! assert!((output.model.bias() - 1.0).abs() < 1e-3);
//! ```

use ndarray::{Array1, ArrayView1, ArrayView2};

use super::{DescentParams, TrainingLogger, Verbosity};
use crate::error::{ensure_len, Result};
use crate::model::LinearModel;
use crate::{multivariate, univariate};

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainOutput {
    /// Final parameters.
    pub model: LinearModel,
    /// Cost after each iteration, one entry per iteration.
    pub cost_history: Vec<f64>,
}

impl TrainOutput {
    /// Cost after the last iteration (`None` if no iteration ran).
    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}

/// Full-batch gradient descent trainer.
#[derive(Debug, Clone, Default)]
pub struct GradientDescentTrainer {
    params: DescentParams,
}

impl GradientDescentTrainer {
    pub fn new(params: DescentParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DescentParams {
        &self.params
    }

    /// Train a multivariate model starting from `(w_in, b_in)`.
    ///
    /// Uses [`multivariate::compute_gradient`].
    pub fn train(
        &self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        w_in: ArrayView1<'_, f64>,
        b_in: f64,
    ) -> Result<TrainOutput> {
        self.train_with(x, y, w_in, b_in, multivariate::compute_gradient)
    }

    /// Train a multivariate model with an injected gradient function.
    ///
    /// The recorded cost is always the mean squared error cost, regardless of
    /// which gradient drives the updates.
    ///
    /// # Errors
    ///
    /// - [`DescentError::Config`](crate::DescentError::Config) if the params are invalid
    /// - shape errors from the inputs, or from a gradient of the wrong length
    /// - any error returned by `gradient_function`
    pub fn train_with<G>(
        &self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        w_in: ArrayView1<'_, f64>,
        b_in: f64,
        mut gradient_function: G,
    ) -> Result<TrainOutput>
    where
        G: FnMut(
            ArrayView2<'_, f64>,
            ArrayView1<'_, f64>,
            ArrayView1<'_, f64>,
            f64,
        ) -> Result<(Array1<f64>, f64)>,
    {
        let model = LinearModel::new(w_in.to_owned(), b_in);

        self.run(
            model,
            x.nrows(),
            |model| {
                let (dj_dw, dj_db) = gradient_function(x, y, model.weights(), model.bias())?;
                ensure_len("gradient", model.n_features(), dj_dw.len())?;
                Ok((dj_dw, dj_db))
            },
            |model| multivariate::compute_cost(x, y, model.weights(), model.bias()),
        )
    }

    /// Train a single-feature model starting from `(w_in, b_in)`.
    ///
    /// Uses [`univariate::compute_gradient`]. The returned model has one weight.
    pub fn train_univariate(
        &self,
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        w_in: f64,
        b_in: f64,
    ) -> Result<TrainOutput> {
        self.run(
            LinearModel::univariate(w_in, b_in),
            x.len(),
            |model| {
                let (dj_dw, dj_db) = univariate::compute_gradient(x, y, model.weight(0), model.bias())?;
                Ok((Array1::from_elem(1, dj_dw), dj_db))
            },
            |model| univariate::compute_cost(x, y, model.weight(0), model.bias()),
        )
    }

    fn run<S, C>(&self, mut model: LinearModel, n_rows: usize, mut step: S, cost: C) -> Result<TrainOutput>
    where
        S: FnMut(&LinearModel) -> Result<(Array1<f64>, f64)>,
        C: Fn(&LinearModel) -> Result<f64>,
    {
        self.params.validate()?;

        let alpha = self.params.learning_rate;
        let n_iters = self.params.n_iters;
        let log_interval = self.params.log_interval();

        // Also validates shapes before any step is taken.
        let mut previous = cost(&model)?;

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_iters, n_rows, model.n_features());

        let mut cost_history = Vec::with_capacity(n_iters);

        for iteration in 0..n_iters {
            let (dj_dw, dj_db) = step(&model)?;

            if logger.enabled(Verbosity::Debug) {
                let grad_norm = (dj_dw.dot(&dj_dw) + dj_db * dj_db).sqrt();
                logger.log_gradient(iteration, grad_norm, dj_db);
            }

            model.descend(alpha, dj_dw.view(), dj_db);

            let current = cost(&model)?;
            if current > previous {
                logger.log_cost_increase(iteration, previous, current);
            }
            if iteration % log_interval == 0 || iteration + 1 == n_iters {
                logger.log_iteration(iteration, current, &model);
            }

            cost_history.push(current);
            previous = current;
        }

        logger.finish_training(cost_history.last().copied());

        Ok(TrainOutput {
            model,
            cost_history,
        })
    }
}
