use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::Classifier;
use crate::common::utils;
use crate::error::{Error, Result};
use crate::softmax::softmax;
use super::separator::Separator;


/// The linear softmax multiclass classifier.
///
/// The weight matrix `W` has one row per coordinate of the
/// bias-augmented input (row `0` is the bias)
/// and one column per class.
/// The score of class `c` (`1`-indexed) at `x` is
/// ```text
/// score_c(x) = W[0][c-1] + W[1][c-1] * x_1 + W[2][c-1] * x_2 + ...
/// ```
/// You can read/write this struct by `serde` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct SoftmaxModel {
    weights: Vec<Vec<f64>>,
}


// Deserialized form, checked by `SoftmaxModel::from_weights`.
#[derive(Deserialize)]
struct RawModel {
    weights: Vec<Vec<f64>>,
}


impl TryFrom<RawModel> for SoftmaxModel {
    type Error = Error;

    fn try_from(raw: RawModel) -> Result<Self> {
        Self::from_weights(raw.weights)
    }
}


impl SoftmaxModel {
    /// Construct a model from the weight matrix given as rows.
    /// Fails if the matrix is empty, ragged,
    /// or has fewer than two rows (bias + at least one feature).
    pub fn from_weights(weights: Vec<Vec<f64>>) -> Result<Self> {
        let n_class = weights.first().map_or(0, |row| row.len());

        if weights.len() < 2 {
            return Err(Error::Dimension(format!(
                "the weight matrix needs a bias row and a feature row, \
                got {} row(s)", weights.len()
            )));
        }
        if n_class == 0 {
            return Err(Error::Dimension(
                "the weight matrix has no class column".into()
            ));
        }
        if weights.iter().any(|row| row.len() != n_class) {
            return Err(Error::Dimension(
                "the rows of the weight matrix differ in length".into()
            ));
        }
        Ok(Self { weights })
    }


    /// The trainer builds its weights with a valid shape.
    pub(crate) fn new(weights: Vec<Vec<f64>>) -> Self {
        Self { weights }
    }


    /// Returns the weight matrix as rows.
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights[..]
    }


    /// Returns `(number of rows, number of classes)`.
    /// The number of rows is the number of features plus one.
    pub fn shape(&self) -> (usize, usize) {
        (self.weights.len(), self.weights[0].len())
    }


    /// Returns the number of classes.
    pub fn n_class(&self) -> usize {
        self.shape().1
    }


    /// Returns the weight vector of class `label` (`1`-indexed).
    pub fn column(&self, label: usize) -> Vec<f64> {
        assert!(
            (1..=self.n_class()).contains(&label),
            "label {label} is outside of 1..={}", self.n_class()
        );
        self.weights.iter()
            .map(|row| row[label - 1])
            .collect()
    }


    /// Returns the class probabilities at a bias-augmented point `x`.
    pub fn probabilities(&self, x: &[f64]) -> Vec<f64> {
        softmax(&self.confidence(x))
    }


    /// Returns the separator line of class `label` (`1`-indexed),
    /// i.e., the zero set of its score.
    /// Returns `None` if the score is constant in the plane.
    ///
    /// Panics if the model is not 2-dimensional.
    pub fn separator(&self, label: usize) -> Option<Separator> {
        assert_eq!(
            self.weights.len(), 3,
            "separator lines exist for 2-dimensional features only"
        );
        let w = self.column(label);
        Separator::from_weights(w[0], w[1], w[2])
    }


    /// Returns the separator lines of all classes, in label order.
    pub fn separators(&self) -> Vec<Option<Separator>> {
        (1..=self.n_class()).map(|label| self.separator(label))
            .collect()
    }


    /// Writes the model to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }


    /// Reads a model written by [`SoftmaxModel::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let model = serde_json::from_str(&json)?;
        Ok(model)
    }
}


impl Classifier for SoftmaxModel {
    #[inline(always)]
    fn confidence(&self, x: &[f64]) -> Vec<f64> {
        utils::linear_scores(&self.weights, x)
    }
}
