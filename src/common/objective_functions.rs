use rayon::prelude::*;

use crate::Sample;
use crate::softmax::{log_sum_exp, softmax};
use super::utils;


/// A trait for the objective minimized by the trainer.
/// The weights are given as rows (bias + features) by columns (classes).
pub trait ObjectiveFunction {
    /// Name of the objective function.
    fn name(&self) -> &str;


    /// Evaluates the objective at `weights`.
    fn objective_value(&self, sample: &Sample, weights: &[Vec<f64>]) -> f64;


    /// Returns the gradient at `weights`,
    /// which has the same shape as `weights`.
    fn gradient(&self, sample: &Sample, weights: &[Vec<f64>])
        -> Vec<Vec<f64>>;
}


/// The multiclass softmax (cross-entropy) cost
/// ```text
/// Cost(W) = Σ_n [ log Σ_c exp(w_c^T x_n) - w_{y_n}^T x_n ]
/// ```
/// summed (not averaged) over the examples.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftmaxCost;


impl ObjectiveFunction for SoftmaxCost {
    fn name(&self) -> &str {
        "Softmax cross-entropy"
    }


    fn objective_value(&self, sample: &Sample, weights: &[Vec<f64>]) -> f64 {
        let n_sample = sample.shape().0;

        // Per-example terms are collected in order and summed sequentially
        // so that the result does not depend on the thread schedule.
        let terms = (0..n_sample).into_par_iter()
            .map(|i| {
                let (x, y) = sample.at(i);
                let scores = utils::linear_scores(weights, &x);
                log_sum_exp(&scores) - scores[y - 1]
            })
            .collect::<Vec<f64>>();

        terms.into_iter().sum::<f64>()
    }


    fn gradient(&self, sample: &Sample, weights: &[Vec<f64>])
        -> Vec<Vec<f64>>
    {
        let n_sample = sample.shape().0;
        let n_row = weights.len();
        let n_class = weights.first().map_or(0, |row| row.len());

        // `residuals[i][c] = P(c | x_i) - 1[y_i == c]`
        let residuals = (0..n_sample).into_par_iter()
            .map(|i| {
                let (x, y) = sample.at(i);
                let scores = utils::linear_scores(weights, &x);
                let mut residual = softmax(&scores);
                residual[y - 1] -= 1.0;
                (x, residual)
            })
            .collect::<Vec<_>>();

        let mut grad = vec![vec![0.0; n_class]; n_row];
        for (x, residual) in residuals {
            grad.iter_mut()
                .zip(&x)
                .for_each(|(row, xj)| {
                    row.iter_mut()
                        .zip(&residual)
                        .for_each(|(g, r)| { *g += xj * r; });
                });
        }
        grad
    }
}
