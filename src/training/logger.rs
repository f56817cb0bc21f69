//! Training progress logging.
//!
//! [`TrainingLogger`] emits `tracing` events gated by a [`Verbosity`] level, so
//! output goes wherever the application's subscriber sends it. With
//! [`Verbosity::Silent`] nothing is emitted at all.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::model::LinearModel;

/// Verbosity level for training output.
///
/// Levels are ordered: `Silent < Warning < Info < Debug`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Only diagnostics such as a diverging cost.
    Warning,
    /// Start/finish summaries and periodic cost reports.
    Info,
    /// Everything above plus per-iteration gradient norms.
    Debug,
}

/// Logs progress of a gradient descent run.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_iters: usize,
    started: Option<Instant>,
    warned_divergence: bool,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_iters: 0,
            started: None,
            warned_divergence: false,
        }
    }

    /// Whether events at `level` are emitted.
    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn start_training(&mut self, n_iters: usize, n_rows: usize, n_features: usize) {
        self.n_iters = n_iters;
        self.started = Some(Instant::now());
        self.warned_divergence = false;

        if self.enabled(Verbosity::Info) {
            info!(n_iters, n_rows, n_features, "starting gradient descent");
        }
    }

    /// Periodic cost report.
    pub fn log_iteration(&self, iteration: usize, cost: f64, model: &LinearModel) {
        if self.enabled(Verbosity::Info) {
            info!(
                iteration,
                n_iters = self.n_iters,
                cost,
                bias = model.bias(),
                weights = ?model.weights().as_slice(),
                "iteration"
            );
        }
    }

    pub fn log_gradient(&self, iteration: usize, grad_norm: f64, dj_db: f64) {
        if self.enabled(Verbosity::Debug) {
            debug!(iteration, grad_norm, dj_db, "gradient");
        }
    }

    /// Warn once per run when the cost goes up.
    ///
    /// Returns `true` if a warning was emitted.
    pub fn log_cost_increase(&mut self, iteration: usize, previous: f64, current: f64) -> bool {
        if self.warned_divergence || !self.enabled(Verbosity::Warning) {
            return false;
        }
        self.warned_divergence = true;
        warn!(
            iteration,
            previous,
            current,
            "cost increased; the learning rate may be too large"
        );
        true
    }

    pub fn finish_training(&self, final_cost: Option<f64>) {
        if self.enabled(Verbosity::Info) {
            let elapsed_ms = self
                .started
                .map(|s| s.elapsed().as_secs_f64() * 1000.0)
                .unwrap_or(0.0);
            info!(n_iters = self.n_iters, final_cost, elapsed_ms, "finished gradient descent");
        }
    }
}
