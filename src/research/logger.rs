use colored::Colorize;

use crate::{
    Sample,
    SoftmaxModel,
    common::ObjectiveFunction,
    error::Result,
    trainer::{Trainer, CurrentModel},
};

use std::fs::File;
use std::io::prelude::*;
use std::ops::ControlFlow;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Iteration,Cost,GradientNorm,TrainError,Time\n";


/// Struct `Logger` provides a generic function that
/// logs the objective value, the gradient norm, the training error,
/// and the running time for each step of the trainer.
pub struct Logger<'a, T, F, G> {
    trainer: T,
    objective_func: F,
    loss_func: G,
    sample: &'a Sample,
    round: usize,
    costs: Vec<f64>,
}


impl<'a, T, F, G> Logger<'a, T, F, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        trainer: T,
        objective_func: F,
        loss_func: G,
        sample: &'a Sample,
    ) -> Self
    {
        Self {
            trainer,
            objective_func,
            loss_func,
            sample,
            round: DEFAULT_ROUND,
            costs: Vec::new(),
        }
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "The print interval must be positive");
        self.round = round;
        self
    }


    /// Returns the objective value after each update of the last run.
    pub fn cost_history(&self) -> &[f64] {
        &self.costs[..]
    }
}


impl<T, F, G> Logger<'_, T, F, G>
    where T: Trainer<Output = SoftmaxModel>
            + CurrentModel<Model = SoftmaxModel>,
          F: ObjectiveFunction,
          G: Fn(&Sample, &SoftmaxModel) -> f64,
{
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "OBJ.".bold().blue(),
            "GRAD.".bold().green(),
            "TRAIN".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ITER.".bold().red(),
            "VALUE".bold().blue(),
            "NORM".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Trainer".bold(),
            self.trainer.name().bold().green(),
        );

        if let Some(info) = self.trainer.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Objective".bold(),
            self.objective_func.name().bold().green(),
            "".bold(),
        );
    }


    /// Run the given trainer with logging.
    /// Note that this method is almost the same as `Trainer::run`.
    /// Each iteration that updates the model appends a row
    /// `Iteration,Cost,GradientNorm,TrainError,Time` to `filename`,
    /// where `Time` is the cumulative running time in milliseconds.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<SoftmaxModel>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.trainer.preprocess()?;
        if self.round != usize::MAX { self.print_stats(); }

        // Cumulative time
        let mut time_acc = 0;
        self.costs.clear();

        // ---------------------------------------------------------------------
        // Training step
        if self.round != usize::MAX { self.print_log_header(); }
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.trainer.step(iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            // `Break(last)` with `last < iter` means that
            // this step stopped without updating the model.
            let last = match flow {
                ControlFlow::Break(last) => last,
                ControlFlow::Continue(()) => iter,
            };

            let f = self.trainer.current_model();
            let obj = self.objective_func
                .objective_value(self.sample, f.weights());
            let grad = self.trainer.gradient_norm();
            let train = (self.loss_func)(self.sample, &f);

            if last == iter {
                self.costs.push(obj);

                // Write the results to `file`.
                writeln!(file, "{iter},{obj},{grad},{train},{time_acc}")?;

                if self.round != usize::MAX && iter % self.round == 0 {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}",
                        "[LOG]".bold().magenta(),
                        format!("{:>WIDTH$}", iter).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", obj).blue(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", grad).green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
            }

            if flow.is_break() {
                if self.round != usize::MAX {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{:>WIDTH$}", last).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", obj).bold().blue(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", grad).bold().green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }
        }

        Ok(self.trainer.postprocess())
    }
}


/// Formats milliseconds as `h:mm:ss.ms`, dropping leading zero units.
fn time_format(millisec: u128) -> String {
    let mut rest = millisec;
    let hrs = rest / 3_600_000;
    rest %= 3_600_000;
    let min = rest / 60_000;
    rest %= 60_000;
    let sec = rest / 1_000;
    let mil = rest % 1_000;

    if hrs > 0 {
        format!("{hrs}h {min:>2}m")
    } else if min > 0 {
        format!("{min:>2}m {sec:>2}s")
    } else {
        format!("{sec:>2}.{mil:03}s")
    }
}
