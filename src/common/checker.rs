//! This file defines some functions that checks some pre-conditions
//! on the arguments of the trainer.


/// Check the step size.
#[inline(always)]
pub(crate) fn check_stepsize(size: f64) {
    assert!(
        size.is_finite() && size > 0.0,
        "The step size must be a positive finite number, got {size}"
    );
}


/// Check the tolerance parameter for the gradient norm.
#[inline(always)]
pub(crate) fn check_tolerance(tolerance: f64) {
    assert!(
        tolerance >= 0.0,
        "The tolerance must be non-negative, got {tolerance}"
    );
}


/// Check the standard deviation of the random initialization.
#[inline(always)]
pub(crate) fn check_deviation(deviation: f64) {
    assert!(
        deviation.is_finite() && deviation > 0.0,
        "The deviation must be a positive finite number, got {deviation}"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepsize_success() {
        check_stepsize(0.01);
        check_stepsize(10.0);
    }

    #[test]
    #[should_panic]
    fn test_stepsize_failure_01() {
        check_stepsize(0.0);
    }

    #[test]
    #[should_panic]
    fn test_stepsize_failure_02() {
        check_stepsize(f64::NAN);
    }

    #[test]
    #[should_panic]
    fn test_tolerance_failure() {
        check_tolerance(-1e-6);
    }
}
