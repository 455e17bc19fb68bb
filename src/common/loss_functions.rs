use crate::{Sample, Classifier};


/// Returns the fraction of examples in `sample`
/// whose predicted label differs from the true one.
pub fn zero_one_loss<C>(sample: &Sample, f: &C) -> f64
    where C: Classifier,
{
    let n_sample = sample.shape().0 as f64;

    let target = sample.target();
    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(p, &y)| if p != y { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample
}
