use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::error::Error;


/// Step size schedule of gradient descent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepSchedule {
    /// `α_t = α`.
    #[default]
    Constant,
    /// `α_t = α / √t`.
    Diminishing,
}


impl StepSchedule {
    /// Returns the step size at iteration `t >= 1`.
    #[inline(always)]
    pub fn step_size(&self, base: f64, t: usize) -> f64 {
        match self {
            Self::Constant => base,
            Self::Diminishing => base / (t as f64).sqrt(),
        }
    }
}


impl fmt::Display for StepSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "constant",
            Self::Diminishing => "diminishing",
        };
        write!(f, "{name}")
    }
}


impl FromStr for StepSchedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant" => Ok(Self::Constant),
            "diminishing" => Ok(Self::Diminishing),
            _ => Err(Error::Argument(format!(
                "unknown schedule `{s}`, expected `constant` or `diminishing`"
            ))),
        }
    }
}


/// Initial weights of gradient descent.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Initialization {
    /// All weights are zero.
    #[default]
    Zeros,
    /// Weights are drawn i.i.d. from `N(0, deviation^2)`
    /// by a generator seeded with `seed`.
    Normal {
        /// Standard deviation.
        deviation: f64,
        /// Seed of the random number generator.
        seed: u64,
    },
}


impl fmt::Display for Initialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zeros => write!(f, "zeros"),
            Self::Normal { deviation, seed } => {
                write!(f, "N(0, {deviation}^2), seed {seed}")
            },
        }
    }
}
