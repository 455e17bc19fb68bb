#![warn(missing_docs)]

//!
//! A crate that learns a linear softmax multiclass classifier
//! by full-batch gradient descent.
//!
//! Given examples `x_1, ..., x_N` with two real features and
//! labels `y_n ∈ {1, ..., C}`, the trainer finds the weight matrix
//! `W` (one column per class) that minimizes the softmax cost
//! ```text
//! Cost(W) = Σ_n [ log Σ_c exp(w_c^T x_n) - w_{y_n}^T x_n ],
//! ```
//! where each `x_n` is augmented with a constant `1` for the bias.
//! The resulting classifier predicts `argmax_c w_c^T x`.
//!
//! The crate also draws the examples, the per-class lines
//! `w_c^T x = 0`, and the fused decision regions.
//!
//! ```no_run
//! use softmax_multiclass::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("data/4class_data.csv")
//!     .read()
//!     .unwrap();
//!
//! let model = GradientDescent::init(&sample)
//!     .step_size(0.01)
//!     .run()
//!     .unwrap();
//!
//! plot_all("fused.png", &sample, &model, &PlotOptions::default())
//!     .unwrap();
//! ```

pub mod error;
pub mod softmax;
pub mod common;
pub mod sample;
pub mod classifier;
pub mod model;
pub mod trainer;
pub mod research;
pub mod plot;
pub mod config;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{Sample, SampleReader};

pub use classifier::Classifier;
pub use model::{SoftmaxModel, Separator};

pub use common::{ObjectiveFunction, SoftmaxCost, zero_one_loss};

pub use trainer::{
    Trainer,
    CurrentModel,
    GradientDescent,
    StepSchedule,
    Initialization,
};

pub use plot::{plot_all, plot_cost_history, PlotOptions};
