//! Run configuration of the `softmax-multiclass` binary.
//!
//! A configuration is read from an optional JSON file
//! and then overridden by command-line flags.
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{
    Sample,
    error::{Error, Result},
    plot::PlotOptions,
    trainer::{GradientDescent, StepSchedule, Initialization},
};


/// Usage of the binary.
pub const USAGE: &str = "\
[USAGE] softmax-multiclass <data.csv> [OPTIONS]

OPTIONS:
    --alpha <A>             step size (default: 0.01)
    --max-iter <N>          maximum number of iterations (default: 1000)
    --tolerance <T>         gradient-norm tolerance (default: 1e-6)
    --schedule <S>          `constant` or `diminishing` (default: constant)
    --seed <SEED>           random N(0, 0.1^2) initialization (default: zeros)
    --header                the first row of the CSV file is a header
    --plot <FILE>           output figure, .png or .svg
                            (default: softmax_multiclass.png)
    --resolution <N>        grid points per axis of the fused rule (default: 300)
    --log <FILE>            per-iteration CSV log
    --history <FILE>        cost curve figure, requires --log
    --print-every <K>       print progress every K iterations (default: 100)
    --save-model <FILE>     write the weight matrix as JSON
    --config <FILE>         read options from a JSON file
    -h, --help              print this message";


const DEFAULT_PLOT: &str = "softmax_multiclass.png";
const INIT_DEVIATION: f64 = 0.1;


/// Options of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// CSV file with the training sample.
    pub data: Option<PathBuf>,
    /// Whether the CSV file has a header row.
    pub has_header: bool,
    /// Step size `α`.
    pub step_size: f64,
    /// Step size schedule.
    pub schedule: StepSchedule,
    /// Maximum number of gradient steps.
    pub max_iter: usize,
    /// Tolerance on the gradient norm.
    pub tolerance: f64,
    /// Seed of the random initialization; zeros if `None`.
    pub seed: Option<u64>,
    /// Output figure.
    pub plot: PathBuf,
    /// Grid resolution of the fused decision regions.
    pub resolution: usize,
    /// Per-iteration CSV log.
    pub log: Option<PathBuf>,
    /// Cost curve figure.
    pub history: Option<PathBuf>,
    /// Progress is printed every `print_every` iterations.
    pub print_every: usize,
    /// Output JSON file for the trained weights.
    pub model: Option<PathBuf>,
}


impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data: None,
            has_header: false,
            step_size: 1e-2,
            schedule: StepSchedule::Constant,
            max_iter: 1_000,
            tolerance: 1e-6,
            seed: None,
            plot: PathBuf::from(DEFAULT_PLOT),
            resolution: PlotOptions::default().resolution,
            log: None,
            history: None,
            print_every: 100,
            model: None,
        }
    }
}


impl RunConfig {
    /// Reads a configuration from a JSON file.
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }


    /// Builds a configuration from command-line arguments
    /// (without the program name).
    /// `--config` is applied first, then the other flags override it.
    pub fn from_args<I, S>(args: I) -> Result<Self>
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let args = args.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        let mut config = match args.iter().position(|a| a == "--config") {
            Some(k) => {
                let path = args.get(k + 1)
                    .ok_or_else(|| missing_value("--config"))?;
                Self::from_file(path)?
            },
            None => Self::default(),
        };

        // A positional path replaces the one read from `--config`.
        let mut positional = false;
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => { iter.next(); },
                "--alpha" | "--step-size" => {
                    config.step_size = value(&arg, iter.next())?;
                },
                "--max-iter" => config.max_iter = value(&arg, iter.next())?,
                "--tolerance" => config.tolerance = value(&arg, iter.next())?,
                "--schedule" => config.schedule = value(&arg, iter.next())?,
                "--seed" => config.seed = Some(value(&arg, iter.next())?),
                "--header" => config.has_header = true,
                "--plot" => config.plot = value(&arg, iter.next())?,
                "--resolution" => {
                    config.resolution = value(&arg, iter.next())?;
                },
                "--log" => config.log = Some(value(&arg, iter.next())?),
                "--history" => {
                    config.history = Some(value(&arg, iter.next())?);
                },
                "--print-every" => {
                    config.print_every = value(&arg, iter.next())?;
                },
                "--save-model" => {
                    config.model = Some(value(&arg, iter.next())?);
                },
                flag if flag.starts_with('-') => {
                    return Err(Error::Argument(format!(
                        "unknown option `{flag}`"
                    )));
                },
                _ => {
                    if positional {
                        return Err(Error::Argument(format!(
                            "unexpected argument `{arg}`"
                        )));
                    }
                    positional = true;
                    config.data = Some(PathBuf::from(arg));
                },
            }
        }

        config.validate()?;
        Ok(config)
    }


    /// Checks the values that the trainer and the plotter would reject.
    pub fn validate(&self) -> Result<()> {
        if self.data.is_none() {
            return Err(Error::Argument("no data file is given".into()));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(Error::Argument(format!(
                "the step size must be positive, got {}", self.step_size
            )));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::Argument(format!(
                "the tolerance must be non-negative, got {}", self.tolerance
            )));
        }
        if self.print_every == 0 {
            return Err(Error::Argument(
                "the print interval must be positive".into()
            ));
        }
        if self.history.is_some() && self.log.is_none() {
            return Err(Error::Argument("--history requires --log".into()));
        }
        self.plot_options().validate()
    }


    /// Returns the trainer configured by `self`.
    pub fn trainer<'a>(&self, sample: &'a Sample) -> GradientDescent<'a> {
        let initialization = match self.seed {
            Some(seed) => Initialization::Normal {
                deviation: INIT_DEVIATION,
                seed,
            },
            None => Initialization::Zeros,
        };

        GradientDescent::init(sample)
            .step_size(self.step_size)
            .schedule(self.schedule)
            .max_iter(self.max_iter)
            .tolerance(self.tolerance)
            .initialization(initialization)
    }


    /// Returns the plot options configured by `self`.
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions::default()
            .resolution(self.resolution)
    }
}


fn missing_value(flag: &str) -> Error {
    Error::Argument(format!("`{flag}` needs a value"))
}


fn value<T: FromStr>(flag: &str, arg: Option<String>) -> Result<T> {
    let arg = arg.ok_or_else(|| missing_value(flag))?;
    arg.parse::<T>()
        .map_err(|_| Error::Argument(format!(
            "invalid value `{arg}` for `{flag}`"
        )))
}
