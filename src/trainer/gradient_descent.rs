//! Provides [`GradientDescent`] for the multiclass softmax cost.
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::{
    Sample,
    SoftmaxModel,
    common::{checker, utils},
    common::{ObjectiveFunction, SoftmaxCost},
    error::{Error, Result},
};
use super::{
    core::{Trainer, CurrentModel},
    options::{StepSchedule, Initialization},
};

use std::ops::ControlFlow;


const DEFAULT_STEP_SIZE: f64 = 1e-2;
const DEFAULT_MAX_ITER: usize = 1_000;
const DEFAULT_TOLERANCE: f64 = 1e-6;


/// Full-batch gradient descent on the multiclass softmax cost.
///
/// Each step computes the softmax probabilities of all examples
/// at the current `W`, forms the gradient
/// ```text
/// ∇_c Cost(W) = Σ_n x_n (P(c | x_n) - 1[y_n == c])
/// ```
/// and moves `W ← W - α_t ∇Cost(W)`.
/// The algorithm stops after `max_iter` updates
/// or once the Frobenius norm of the gradient is at most `tolerance`.
///
/// # Example
/// ```no_run
/// use softmax_multiclass::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("4class_data.csv")
///     .read()
///     .unwrap();
///
/// let mut trainer = GradientDescent::init(&sample)
///     .step_size(0.01)
///     .max_iter(2_000);
/// let model = trainer.run().unwrap();
///
/// let predictions = model.predict_all(&sample);
/// ```
pub struct GradientDescent<'a> {
    // Training sample
    sample: &'a Sample,

    // Base step size `α`.
    step_size: f64,
    schedule: StepSchedule,
    initialization: Initialization,

    max_iter: usize,

    // Stops once `‖∇Cost(W)‖_F <= tolerance`.
    tolerance: f64,

    // Current weights, `(n_feature + 1) × n_class`.
    weights: Vec<Vec<f64>>,

    // Gradient norm at the last step.
    gradient_norm: f64,

    terminated: usize,
}


impl<'a> GradientDescent<'a> {
    /// Initialize the `GradientDescent`.
    /// Defaults: step size `0.01`, constant schedule,
    /// `1000` iterations, tolerance `1e-6`, zero initialization.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,

            step_size: DEFAULT_STEP_SIZE,
            schedule: StepSchedule::Constant,
            initialization: Initialization::Zeros,

            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,

            weights: Vec::new(),
            gradient_norm: f64::INFINITY,
            terminated: usize::MAX,
        }
    }


    /// Set the step size `α`.
    pub fn step_size(mut self, size: f64) -> Self {
        checker::check_stepsize(size);
        self.step_size = size;
        self
    }


    /// Set the step size schedule.
    pub fn schedule(mut self, schedule: StepSchedule) -> Self {
        self.schedule = schedule;
        self
    }


    /// Set the maximum number of updates.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Set the tolerance on the gradient norm.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        checker::check_tolerance(tolerance);
        self.tolerance = tolerance;
        self
    }


    /// Set the initial weights.
    pub fn initialization(mut self, initialization: Initialization) -> Self {
        if let Initialization::Normal { deviation, .. } = initialization {
            checker::check_deviation(deviation);
        }
        self.initialization = initialization;
        self
    }


    /// Returns the iteration at which the last run terminated.
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    fn initial_weights(&self) -> Result<Vec<Vec<f64>>> {
        let n_row = self.sample.shape().1 + 1;
        let n_class = self.sample.n_class();

        let weights = match self.initialization {
            Initialization::Zeros => vec![vec![0.0; n_class]; n_row],
            Initialization::Normal { deviation, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let dist = Normal::<f64>::new(0.0, deviation)
                    .map_err(|e| Error::Argument(e.to_string()))?;
                (0..n_row).map(|_|
                        dist.sample_iter(&mut rng)
                            .take(n_class)
                            .collect::<Vec<_>>()
                    )
                    .collect()
            },
        };
        Ok(weights)
    }
}


impl Trainer for GradientDescent<'_> {
    type Output = SoftmaxModel;


    fn name(&self) -> &str {
        "Gradient Descent"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of classes", format!("{}", self.sample.n_class())),
            ("Step size", format!("{}", self.step_size)),
            ("Schedule", format!("{}", self.schedule)),
            ("Max iteration", format!("{}", self.max_iter)),
            ("Tolerance", format!("{}", self.tolerance)),
            ("Initialization", format!("{}", self.initialization)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        let (n_sample, n_feature) = self.sample.shape();
        if n_sample == 0 { return Err(Error::EmptySample); }
        if n_feature == 0 { return Err(Error::NoFeature); }

        let bias = &self.sample.features()[0];
        if bias.iter().any(|&b| b != 1.0) {
            return Err(Error::Dimension(
                "the first row of the feature matrix must be all ones".into()
            ));
        }

        self.weights = self.initial_weights()?;
        self.gradient_norm = f64::INFINITY;
        self.terminated = usize::MAX;
        Ok(())
    }


    fn step(&mut self, iteration: usize) -> Result<ControlFlow<usize>> {
        if self.max_iter < iteration {
            self.terminated = self.max_iter;
            return Ok(ControlFlow::Break(self.max_iter));
        }

        let grad = SoftmaxCost.gradient(self.sample, &self.weights);
        if !utils::all_finite(&grad) {
            return Err(Error::NonFinite { quantity: "gradient", iteration });
        }

        self.gradient_norm = utils::frobenius_norm(&grad);
        if self.gradient_norm <= self.tolerance {
            self.terminated = iteration - 1;
            return Ok(ControlFlow::Break(iteration - 1));
        }

        let size = self.schedule.step_size(self.step_size, iteration);
        self.weights.iter_mut()
            .zip(grad)
            .for_each(|(row, grow)| {
                row.iter_mut()
                    .zip(grow)
                    .for_each(|(w, g)| { *w -= size * g; });
            });

        if !utils::all_finite(&self.weights) {
            return Err(Error::NonFinite { quantity: "weights", iteration });
        }

        if iteration == self.max_iter {
            self.terminated = iteration;
            return Ok(ControlFlow::Break(iteration));
        }
        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        SoftmaxModel::new(self.weights.clone())
    }
}


impl CurrentModel for GradientDescent<'_> {
    type Model = SoftmaxModel;

    fn current_model(&self) -> Self::Model {
        SoftmaxModel::new(self.weights.clone())
    }

    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}
