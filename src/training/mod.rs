//! Training infrastructure.
//!
//! - [`GradientDescentTrainer`]: configured full-batch gradient descent with
//!   cost history
//! - [`DescentParams`]: validated parameters built with `DescentParams::builder()`
//! - [`TrainingLogger`], [`Verbosity`]: structured progress logging via `tracing`

mod logger;
mod params;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use params::DescentParams;
pub use trainer::{GradientDescentTrainer, TrainOutput};
