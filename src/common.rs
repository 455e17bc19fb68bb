//! Defines some common functions used in this library.

/// Defines the objective function trait and the softmax cost.
pub mod objective_functions;

/// Defines loss functions used to report training error.
pub mod loss_functions;

/// Defines some useful functions such as inner products.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use objective_functions::{ObjectiveFunction, SoftmaxCost};
pub use loss_functions::zero_one_loss;
