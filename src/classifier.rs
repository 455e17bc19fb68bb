//! The classifier trait implemented by the trained model.
use crate::Sample;
use crate::common::utils;


/// A trait that defines the prediction of a multiclass linear model.
/// Labels are `1`-indexed, as in [`Sample::target`].
pub trait Classifier {
    /// Returns the score of each class at a bias-augmented point `x`.
    fn confidence(&self, x: &[f64]) -> Vec<f64>;


    /// Predicts the label of a bias-augmented point `x`,
    /// i.e., the class with the largest score.
    fn predict_point(&self, x: &[f64]) -> usize {
        let scores = self.confidence(x);
        utils::argmax(&scores) + 1
    }


    /// Predicts the label of the `row`-th example of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> usize {
        let (x, _) = sample.at(row);
        self.predict_point(&x)
    }


    /// Predicts the labels of all examples in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect()
    }
}
