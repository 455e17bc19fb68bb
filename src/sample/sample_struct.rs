use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::BTreeSet;

use polars::prelude::*;

use crate::error::{Error, Result};


/// Struct `Sample` holds a labeled batch sample.
///
/// The features are stored as a bias-augmented matrix:
/// row `0` is identically `1`, row `j >= 1` is the `j`-th feature,
/// and column `i` is the `i`-th example.
/// Labels take values in `{1, 2, ..., C}`,
/// where `C` is the number of distinct labels.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) names: Vec<String>,
    pub(super) features: Vec<Vec<f64>>,
    pub(super) target: Vec<usize>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
    pub(super) n_class: usize,
}


impl Sample {
    /// Construct a sample from in-memory points.
    /// `points[i]` holds the features (without bias) of the `i`-th example
    /// and `labels[i]` is its class label.
    pub fn from_points<T>(points: &[T], labels: &[f64]) -> Result<Self>
        where T: AsRef<[f64]>,
    {
        if points.len() != labels.len() {
            return Err(Error::Dimension(format!(
                "{} points but {} labels", points.len(), labels.len()
            )));
        }
        let n_feature = points.first()
            .map(|p| p.as_ref().len())
            .ok_or(Error::EmptySample)?;

        let mut columns = vec![Vec::with_capacity(points.len()); n_feature];
        for (i, point) in points.iter().enumerate() {
            let point = point.as_ref();
            if point.len() != n_feature {
                return Err(Error::Dimension(format!(
                    "point {i} has {} features, expected {n_feature}",
                    point.len()
                )));
            }
            columns.iter_mut()
                .zip(point)
                .for_each(|(col, x)| col.push(*x));
        }

        let names = default_names(n_feature);
        Self::build(names, columns, labels.to_vec())
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Every column of `data` is used as a feature
    /// and `target` holds the class labels.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let labels = series_to_vec(&target)?;

        let names = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        let columns = data.get_columns()
            .iter()
            .map(series_to_vec)
            .collect::<Result<Vec<_>>>()?;

        Self::build(names, columns, labels)
    }


    /// Read a CSV format file to `Sample` type.
    /// The last column is the class label
    /// and the preceding columns are the features.
    /// Blank lines are skipped.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut n_column = 0_usize;

        // For each line of the file
        for (k, line) in lines.enumerate() {
            let line = line?;
            let line_no = k + 1;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            if has_header && header.is_none() {
                n_column = cells.len();
                header = Some(cells.iter().map(|c| c.to_string()).collect());
                continue;
            }

            if n_column == 0 { n_column = cells.len(); }
            if cells.len() != n_column {
                return Err(Error::Ragged {
                    line: line_no,
                    expected: n_column,
                    found: cells.len(),
                });
            }

            let row = cells.into_iter()
                .enumerate()
                .map(|(j, cell)| {
                    cell.parse::<f64>()
                        .map_err(|_| Error::Parse {
                            line: line_no,
                            column: j + 1,
                            value: cell.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        if rows.is_empty() { return Err(Error::EmptySample); }
        if n_column < 2 { return Err(Error::NoFeature); }

        let n_feature = n_column - 1;
        let mut columns = vec![Vec::with_capacity(rows.len()); n_feature];
        let mut labels = Vec::with_capacity(rows.len());
        for mut row in rows {
            // `row` is non-empty since `n_column >= 2`.
            let y = row.pop().unwrap_or(f64::NAN);
            labels.push(y);
            columns.iter_mut()
                .zip(row)
                .for_each(|(col, x)| col.push(x));
        }

        let names = match header {
            Some(mut names) => { names.truncate(n_feature); names },
            None => default_names(n_feature),
        };
        Self::build(names, columns, labels)
    }


    /// Validates the labels, prepends the bias row,
    /// and assembles the sample.
    fn build(
        names: Vec<String>,
        columns: Vec<Vec<f64>>,
        labels: Vec<f64>,
    ) -> Result<Self>
    {
        let n_sample = labels.len();
        if n_sample == 0 { return Err(Error::EmptySample); }

        let n_feature = columns.len();
        if n_feature == 0 { return Err(Error::NoFeature); }

        if let Some(col) = columns.iter().find(|col| col.len() != n_sample) {
            return Err(Error::Dimension(format!(
                "a feature has {} values but there are {n_sample} labels",
                col.len()
            )));
        }

        let (target, n_class) = validate_labels(&labels)?;

        let mut features = Vec::with_capacity(n_feature + 1);
        features.push(vec![1.0; n_sample]);
        features.extend(columns);

        let sample = Self {
            names, features, target, n_sample, n_feature, n_class,
        };
        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features (the bias row is not counted).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the number of classes `C`.
    pub fn n_class(&self) -> usize {
        self.n_class
    }


    /// Returns the bias-augmented feature matrix as rows.
    /// `self.features()[0]` is all ones.
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features[..]
    }


    /// Returns the labels, each in `1..=C`.
    pub fn target(&self) -> &[usize] {
        &self.target[..]
    }


    /// Returns the feature names.
    pub fn feature_names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the `idx`-th example as a bias-augmented vector
    /// together with its label.
    pub fn at(&self, idx: usize) -> (Vec<f64>, usize) {
        let x = self.features.iter()
            .map(|row| row[idx])
            .collect::<Vec<_>>();
        (x, self.target[idx])
    }


    /// Returns the indices of the examples labeled `label`.
    pub fn class_indices(&self, label: usize) -> Vec<usize> {
        self.target.iter()
            .enumerate()
            .filter_map(|(i, &y)| (y == label).then_some(i))
            .collect()
    }
}


/// Checks that every label is an integer in `1..=C`,
/// where `C` is the number of distinct labels,
/// and returns the labels together with `C`.
fn validate_labels(labels: &[f64]) -> Result<(Vec<usize>, usize)> {
    let mut distinct = BTreeSet::new();
    for (row, &y) in labels.iter().enumerate() {
        if !y.is_finite() || y.fract() != 0.0 {
            return Err(Error::NonIntegerLabel { row, value: y });
        }
        distinct.insert(y as i64);
    }

    let n_class = distinct.len();
    labels.iter()
        .enumerate()
        .map(|(row, &y)| {
            let label = y as i64;
            if label < 1 || label as usize > n_class {
                Err(Error::LabelOutOfRange { row, label, n_class })
            } else {
                Ok(label as usize)
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(|target| (target, n_class))
}


fn series_to_vec(series: &Series) -> Result<Vec<f64>> {
    let casted = series.cast(&DataType::Float64)?;
    let values = casted.f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>();

    values.ok_or_else(|| Error::MissingValue {
        column: series.name().to_string(),
    })
}


fn default_names(n_feature: usize) -> Vec<String> {
    (1..=n_feature).map(|i| format!("Feat. [{i}]"))
        .collect()
}
