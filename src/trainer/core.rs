use crate::error::Result;
use std::ops::ControlFlow;


/// The trait [`Trainer`] defines an iterative training procedure.
///
/// # Required Methods
/// - [`Trainer::name`]
/// - [`Trainer::preprocess`]
/// - [`Trainer::step`]
/// - [`Trainer::postprocess`]
/// - [`Trainer::info`] ... optional.
///
/// # Provided Methods
/// - [`Trainer::run`]
pub trait Trainer {
    /// The model output by the trainer.
    type Output;


    /// Returns the name of the training algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs the training algorithm.
    fn run(&mut self) -> Result<Self::Output> {
        self.preprocess()?;

        for iteration in 1.. {
            if self.step(iteration)?.is_break() { break; }
        }

        Ok(self.postprocess())
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Trainer::run`],
    /// this method is called before the first step.
    fn preprocess(&mut self) -> Result<()>;


    /// Update step per iteration.
    /// Returns `ControlFlow::Break(it)` once the algorithm terminates,
    /// where `it` is the last iteration that updated the model.
    fn step(&mut self, iteration: usize) -> Result<ControlFlow<usize>>;


    /// Post-processing.
    fn postprocess(&mut self) -> Self::Output;
}


/// Implementing this trait allows
/// [`Logger`](crate::research::Logger) to observe the trainer.
pub trait CurrentModel {
    /// The model type.
    type Model;

    /// Returns the model at the current state.
    fn current_model(&self) -> Self::Model;

    /// Returns the gradient norm measured at the last step.
    fn gradient_norm(&self) -> f64;
}
