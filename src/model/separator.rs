/// The zero set `w0 + w1 * x + w2 * y = 0` of a class score
/// over a 2-dimensional feature space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separator {
    /// `y = intercept + slope * x`.
    Line {
        /// Value at `x = 0`.
        intercept: f64,
        /// Slope of the line.
        slope: f64,
    },
    /// `x = x`, arising when `w2 == 0`.
    Vertical {
        /// Position of the line.
        x: f64,
    },
}


impl Separator {
    /// Construct the separator of the score `w0 + w1 * x + w2 * y`.
    /// Returns `None` if `w1 == w2 == 0` or the result is not finite.
    pub fn from_weights(w0: f64, w1: f64, w2: f64) -> Option<Self> {
        let separator = if w2 != 0.0 {
            Self::Line { intercept: -w0 / w2, slope: -w1 / w2 }
        } else if w1 != 0.0 {
            Self::Vertical { x: -w0 / w1 }
        } else {
            return None;
        };

        let finite = match separator {
            Self::Line { intercept, slope } => {
                intercept.is_finite() && slope.is_finite()
            },
            Self::Vertical { x } => x.is_finite(),
        };
        finite.then_some(separator)
    }


    /// Returns the `y` value at `x`, or `None` for a vertical line.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self {
            Self::Line { intercept, slope } => Some(intercept + slope * x),
            Self::Vertical { .. } => None,
        }
    }


    /// Clips the separator to the box `x_range × y_range`
    /// and returns the end points of the visible segment.
    pub fn clip(&self, x_range: (f64, f64), y_range: (f64, f64))
        -> Option<[(f64, f64); 2]>
    {
        let (x0, x1) = x_range;
        let (y0, y1) = y_range;
        match *self {
            Self::Vertical { x } => {
                (x0..=x1).contains(&x).then_some([(x, y0), (x, y1)])
            },
            Self::Line { intercept, slope } if slope == 0.0 => {
                (y0..=y1).contains(&intercept)
                    .then_some([(x0, intercept), (x1, intercept)])
            },
            Self::Line { intercept, slope } => {
                // `x` values at which the line crosses `y0` and `y1`.
                let xa = (y0 - intercept) / slope;
                let xb = (y1 - intercept) / slope;
                let lo = x0.max(xa.min(xb));
                let hi = x1.min(xa.max(xb));
                if lo > hi { return None; }

                let y = |x: f64| (intercept + slope * x).clamp(y0, y1);
                Some([(lo, y(lo)), (hi, y(hi))])
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_separator() {
        // 1 - x - y = 0  <=>  y = 1 - x.
        let sep = Separator::from_weights(1.0, -1.0, -1.0).unwrap();
        assert_eq!(sep, Separator::Line { intercept: 1.0, slope: -1.0 });

        let [p, q] = sep.clip((0.0, 1.0), (0.0, 1.0)).unwrap();
        assert!(p.0.abs() < 1e-12 && (p.1 - 1.0).abs() < 1e-12);
        assert!((q.0 - 1.0).abs() < 1e-12 && q.1.abs() < 1e-12);
    }

    #[test]
    fn steep_separator_is_clipped_to_the_window() {
        // y = -10 + 20x crosses the unit box for x in [0.5, 0.55].
        let sep = Separator::Line { intercept: -10.0, slope: 20.0 };
        let [p, q] = sep.clip((0.0, 1.0), (0.0, 1.0)).unwrap();
        assert!((p.0 - 0.5).abs() < 1e-12 && p.1.abs() < 1e-12);
        assert!((q.0 - 0.55).abs() < 1e-12 && (q.1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn separator_outside_the_window() {
        let sep = Separator::Line { intercept: 5.0, slope: 0.0 };
        assert!(sep.clip((0.0, 1.0), (0.0, 1.0)).is_none());

        let sep = Separator::Line { intercept: 3.0, slope: 1.0 };
        assert!(sep.clip((0.0, 1.0), (0.0, 1.0)).is_none());
    }

    #[test]
    fn vertical_and_degenerate_separators() {
        let sep = Separator::from_weights(-0.5, 1.0, 0.0).unwrap();
        assert_eq!(sep, Separator::Vertical { x: 0.5 });
        assert_eq!(sep.y_at(0.3), None);
        assert_eq!(
            sep.clip((0.0, 1.0), (0.0, 1.0)),
            Some([(0.5, 0.0), (0.5, 1.0)])
        );

        assert!(Separator::from_weights(1.0, 0.0, 0.0).is_none());
    }
}
