//! The trained weight matrix and the lines it induces.

/// Defines the softmax model.
pub mod softmax_model;
/// Defines the per-class separator lines in the plane.
pub mod separator;

pub use softmax_model::SoftmaxModel;
pub use separator::Separator;
