//! Exports the trainer, the model, and the traits.
//!
pub use crate::trainer::{
    // Trainer trait
    Trainer,
    CurrentModel,

    GradientDescent,
    StepSchedule,
    Initialization,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::classifier::Classifier;
pub use crate::model::{SoftmaxModel, Separator};


pub use crate::common::{
    ObjectiveFunction,
    SoftmaxCost,
    zero_one_loss,
};


pub use crate::research::Logger;


pub use crate::plot::{
    plot_all,
    plot_cost_history,
    PlotOptions,
};


pub use crate::error::{Error, Result};
