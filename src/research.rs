//! This directory provides some features for research.
//! Measure the followings of the trainer per iteration
//! - Running time
//! - Objective value
//! - Gradient norm
//! - Training error

/// Defines a logger that runs a trainer with logging.
pub mod logger;

pub use logger::Logger;
