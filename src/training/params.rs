//! Gradient descent configuration with builder pattern.
//!
//! [`DescentParams`] uses the `bon` crate for builder generation and is
//! validated when built.
//!
//! # Example
//!
//! ```
//! use linreg_descent::training::{DescentParams, Verbosity};
//!
//! // All defaults
//! let params = DescentParams::builder().build().unwrap();
//! assert_eq!(params.n_iters, 1000);
//!
//! let params = DescentParams::builder()
//!     .learning_rate(5.0e-7)
//!     .n_iters(10_000)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.log_interval(), 1000);
//! ```

use std::num::NonZeroUsize;

use bon::Builder;

use super::Verbosity;
use crate::error::ConfigError;

/// Parameters for a gradient descent run.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct DescentParams {
    /// Learning rate (alpha). Default: 0.01.
    ///
    /// Must be finite and non-negative; zero leaves the parameters unchanged.
    #[builder(default = 0.01)]
    pub learning_rate: f64,

    /// Number of iterations. Default: 1000. Always run to completion.
    #[builder(default = 1000)]
    pub n_iters: usize,

    /// Report the cost every this many iterations.
    /// `None` reports ten times over the run.
    pub log_every: Option<NonZeroUsize>,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: descent_params_builder::IsComplete> DescentParamsBuilder<S> {
    /// Build and validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLearningRate`] if the learning rate is
    /// negative or not finite.
    pub fn build(self) -> Result<DescentParams, ConfigError> {
        let params = self.__build_internal();
        params.validate()?;
        Ok(params)
    }
}

impl DescentParams {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }

    /// Iterations between progress reports (never zero).
    pub fn log_interval(&self) -> usize {
        self.log_every
            .map(NonZeroUsize::get)
            .unwrap_or_else(|| self.n_iters.div_ceil(10).max(1))
    }
}

impl Default for DescentParams {
    fn default() -> Self {
        Self::builder().build().expect("default params are valid")
    }
}
