use rayon::prelude::*;

use crate::{
    Classifier,
    SoftmaxModel,
    common::utils,
    error::{Error, Result},
};


/// The labels predicted by the fused rule `argmax_c score_c(x)`
/// over a regular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // `labels[j][i]` is the label at `(xs[i], ys[j])`.
    labels: Vec<Vec<usize>>,
}


/// Evaluates all class scores of a 2-dimensional `model`
/// at `resolution × resolution` evenly spaced points of
/// `x_range × y_range` and keeps the arg-max class at each point.
pub fn decision_grid(
    model: &SoftmaxModel,
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
) -> Result<DecisionGrid>
{
    if model.shape().0 != 3 {
        return Err(Error::Dimension(format!(
            "decision regions need 2 features, the model has {}",
            model.shape().0 - 1
        )));
    }

    let xs = utils::linspace(x_range.0, x_range.1, resolution);
    let ys = utils::linspace(y_range.0, y_range.1, resolution);

    let labels = ys.par_iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| model.predict_point(&[1.0, x, y]))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(DecisionGrid { xs, ys, labels })
}


impl DecisionGrid {
    /// Grid coordinates along the horizontal axis.
    pub fn xs(&self) -> &[f64] {
        &self.xs[..]
    }


    /// Grid coordinates along the vertical axis.
    pub fn ys(&self) -> &[f64] {
        &self.ys[..]
    }


    /// Returns the label at `(xs[i], ys[j])`.
    pub fn label_at(&self, i: usize, j: usize) -> usize {
        self.labels[j][i]
    }


    /// Returns the spacing between neighboring grid points.
    pub fn cell_size(&self) -> (f64, f64) {
        let step = |v: &[f64]| {
            if v.len() < 2 { 0.0 } else { v[1] - v[0] }
        };
        (step(&self.xs), step(&self.ys))
    }


    /// Returns the grid points `(i, j)` whose label differs from
    /// the label of its right or upper neighbor.
    /// These points trace the boundaries between the decision regions.
    pub fn boundary_cells(&self) -> Vec<(usize, usize)> {
        let nx = self.xs.len();
        let ny = self.ys.len();

        let mut cells = Vec::new();
        for j in 0..ny {
            for i in 0..nx {
                let here = self.labels[j][i];
                let right = i + 1 < nx && self.labels[j][i + 1] != here;
                let upper = j + 1 < ny && self.labels[j + 1][i] != here;
                if right || upper { cells.push((i, j)); }
            }
        }
        cells
    }


    /// Returns the number of grid points labeled `label`.
    pub fn count(&self, label: usize) -> usize {
        self.labels.iter()
            .flatten()
            .filter(|&&l| l == label)
            .count()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Class 1 wins for `x < 0.5`, class 2 for `x > 0.5`.
    fn vertical_split() -> SoftmaxModel {
        SoftmaxModel::from_weights(vec![
            vec![0.5, -0.5],
            vec![-1.0, 1.0],
            vec![0.0, 0.0],
        ]).unwrap()
    }

    #[test]
    fn grid_takes_the_argmax_class() {
        let grid = decision_grid(&vertical_split(), (0.0, 1.0), (0.0, 1.0), 11)
            .unwrap();
        assert_eq!(grid.xs().len(), 11);
        assert_eq!(grid.label_at(0, 0), 1);
        assert_eq!(grid.label_at(10, 3), 2);
        // `x = 0.5` is a tie, which goes to the smaller label.
        assert_eq!(grid.label_at(5, 7), 1);
        assert_eq!(grid.count(1) + grid.count(2), 121);
    }

    #[test]
    fn boundary_follows_the_split() {
        let grid = decision_grid(&vertical_split(), (0.0, 1.0), (0.0, 1.0), 11)
            .unwrap();
        let cells = grid.boundary_cells();

        // One boundary cell per row, right before the switch.
        assert_eq!(cells.len(), 11);
        assert!(cells.iter().all(|&(i, _)| i == 5));
    }

    #[test]
    fn grid_rejects_higher_dimensional_models() {
        let model = SoftmaxModel::from_weights(vec![vec![0.0, 0.0]; 4])
            .unwrap();
        assert!(decision_grid(&model, (0.0, 1.0), (0.0, 1.0), 5).is_err());
    }
}
