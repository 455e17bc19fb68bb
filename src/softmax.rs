//! Numerically stable softmax.
//!
//! Both functions subtract the maximum score before exponentiating,
//! so large scores never overflow.


/// Returns `ln Σ_i exp(scores[i])`.
///
/// Returns `-∞` for an empty slice and `+∞` if a score is `+∞`.
/// A `NaN` score propagates.
#[inline]
pub fn log_sum_exp(scores: &[f64]) -> f64 {
    let max = scores.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if !max.is_finite() {
        if scores.iter().any(|s| s.is_nan()) { return f64::NAN; }
        return max;
    }

    let sum = scores.iter()
        .map(|s| (s - max).exp())
        .sum::<f64>();

    max + sum.ln()
}


/// Maps the scores to a probability vector.
#[inline]
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let lse = log_sum_exp(scores);
    scores.iter()
        .map(|s| (s - lse).exp())
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax(&[-0.0654, -1.1302, 0.8120, 0.9402]);
        let expected = [0.1542, 0.0532, 0.3709, 0.4217];

        for (pi, ei) in p.iter().zip(expected) {
            assert!((pi - ei).abs() < 1e-3, "{pi}, {ei}");
        }
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn softmax_survives_huge_scores() {
        let p = softmax(&[1_000.0, 1_000.0, -1_000.0]);
        assert!(p.iter().all(|pi| pi.is_finite()));
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);
        assert!(p[2] < 1e-300);
    }

    #[test]
    fn log_sum_exp_matches_naive_sum() {
        let scores = [0.3, -1.2, 2.5];
        let naive = scores.iter().map(|s: &f64| s.exp()).sum::<f64>().ln();
        assert!((log_sum_exp(&scores) - naive).abs() < 1e-12);
        assert!((log_sum_exp(&[800.0, 800.0]) - (800.0 + 2f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn log_sum_exp_edge_cases() {
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(log_sum_exp(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert!(log_sum_exp(&[1.0, f64::NAN]).is_nan());
    }
}
