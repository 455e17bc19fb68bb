//! Provides the gradient-descent trainer for the softmax model.

/// Defines the `Trainer` trait.
pub mod core;
/// Defines full-batch gradient descent.
pub mod gradient_descent;
/// Defines the step-size schedules and initializations.
pub mod options;

pub use self::core::{Trainer, CurrentModel};
pub use gradient_descent::GradientDescent;
pub use options::{StepSchedule, Initialization};
