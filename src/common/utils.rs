//! This file provides small linear-algebra helpers
//! shared by the trainer, the model, and the plotter.


/// Returns the per-class scores `W^T x`
/// for a bias-augmented point `x`.
/// `weights` is given as rows, one row per coordinate of `x`.
#[inline(always)]
pub fn linear_scores(weights: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    assert_eq!(weights.len(), x.len());
    let n_class = weights.first().map_or(0, |row| row.len());

    let mut scores = vec![0.0; n_class];
    for (row, xj) in weights.iter().zip(x) {
        scores.iter_mut()
            .zip(row)
            .for_each(|(s, w)| { *s += w * xj; });
    }
    scores
}


/// Returns the Frobenius norm of a matrix given as rows.
#[inline(always)]
pub fn frobenius_norm(matrix: &[Vec<f64>]) -> f64 {
    matrix.iter()
        .flatten()
        .map(|m| m * m)
        .sum::<f64>()
        .sqrt()
}


/// Returns `true` if every entry of the matrix is finite.
#[inline(always)]
pub(crate) fn all_finite(matrix: &[Vec<f64>]) -> bool {
    matrix.iter()
        .flatten()
        .all(|m| m.is_finite())
}


/// Returns the index of the largest entry.
/// Ties are broken toward the smaller index.
/// Returns `0` for an empty slice.
#[inline(always)]
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0_usize;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] { best = i; }
    }
    best
}


/// Returns `n` evenly spaced points over `[start, end]`,
/// both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64)
                .collect()
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_breaks_ties_toward_first() {
        assert_eq!(argmax(&[0.1, 0.7, 0.7, -1.0]), 1);
        assert_eq!(argmax(&[3.0]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn linear_scores_is_transposed_product() {
        // Two classes, bias + one feature.
        let w = vec![vec![1.0, -1.0], vec![2.0, 3.0]];
        assert_eq!(linear_scores(&w, &[1.0, 0.5]), vec![2.0, 0.5]);
    }

    #[test]
    fn frobenius_norm_of_rows() {
        let m = vec![vec![3.0, 0.0], vec![0.0, 4.0]];
        assert_eq!(frobenius_norm(&m), 5.0);
        assert!(all_finite(&m));
        assert!(!all_finite(&[vec![f64::NAN]]));
    }
}
