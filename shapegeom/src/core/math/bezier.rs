use crate::core::traits::Real;

/// Evaluates one coordinate of a quadratic Bezier curve at parametric value `t`.
///
/// Uses the Bernstein basis `(1-t)^2 * start + 2t(1-t) * ctrl + t^2 * end`, so `t = 0` yields
/// `start` and `t = 1` yields `end`. Call once per axis to get a point on the curve.
///
/// `t` is not range checked: values outside `[0, 1]` extrapolate along the same polynomial.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// assert_eq!(quadratic_bezier_value(0.0, 1.0, 5.0, 3.0), 1.0);
/// assert_eq!(quadratic_bezier_value(1.0, 1.0, 5.0, 3.0), 3.0);
/// assert_eq!(quadratic_bezier_value(0.5, 0.0, 2.0, 0.0), 1.0);
/// ```
#[inline]
pub fn quadratic_bezier_value<T>(t: T, start: T, ctrl: T, end: T) -> T
where
    T: Real,
{
    let u = T::one() - t;
    u * u * start + T::two() * t * u * ctrl + t * t * end
}

/// Evaluates one coordinate of a cubic Bezier curve at parametric value `t`.
///
/// Uses the Bernstein basis
/// `(1-t)^3 * start + 3t(1-t)^2 * ctrl1 + 3t^2(1-t) * ctrl2 + t^3 * end`.
/// The `start` weight is the one equal to 1 at `t = 0` (and `end` the one equal to 1 at `t = 1`),
/// so the curve always begins at `start` and finishes at `end`.
///
/// `t` is not range checked: values outside `[0, 1]` extrapolate along the same polynomial.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// assert_eq!(cubic_bezier_value(0.0, 0.0, 1.0, 2.0, 3.0), 0.0);
/// assert_eq!(cubic_bezier_value(1.0, 0.0, 1.0, 2.0, 3.0), 3.0);
/// // evenly spaced control values trace the straight line, midpoint at t = 0.5
/// assert_eq!(cubic_bezier_value(0.5, 0.0, 1.0, 2.0, 3.0), 1.5);
/// ```
#[inline]
pub fn cubic_bezier_value<T>(t: T, start: T, ctrl1: T, ctrl2: T, end: T) -> T
where
    T: Real,
{
    let u = T::one() - t;
    let three = T::three();
    u * u * u * start + three * t * u * u * ctrl1 + three * t * t * u * ctrl2 + t * t * t * end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    const CONTROL_SETS: &[[f64; 4]] = &[
        [0.0, 1.0, 2.0, 3.0],
        [-5.0, 10.0, -10.0, 5.0],
        [1e6, -3.25, 0.5, 42.0],
        [7.0, 7.0, 7.0, 7.0],
    ];

    #[test]
    fn cubic_boundaries() {
        for &[s, c1, c2, e] in CONTROL_SETS {
            assert_eq!(cubic_bezier_value(0.0, s, c1, c2, e), s);
            assert_eq!(cubic_bezier_value(1.0, s, c1, c2, e), e);
        }
    }

    #[test]
    fn quadratic_boundaries() {
        for &[s, c, _, e] in CONTROL_SETS {
            assert_eq!(quadratic_bezier_value(0.0, s, c, e), s);
            assert_eq!(quadratic_bezier_value(1.0, s, c, e), e);
        }
    }

    #[test]
    fn cubic_weights_sum_to_one() {
        // all control values equal means the curve is constant
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert!(cubic_bezier_value(t, 7.0, 7.0, 7.0, 7.0).fuzzy_eq(7.0));
            assert!(quadratic_bezier_value(t, -2.0, -2.0, -2.0).fuzzy_eq(-2.0));
        }
    }

    #[test]
    fn start_weight_is_not_t_cubed() {
        // a swapped basis would put the curve at `end` for small t
        let v = cubic_bezier_value(0.1_f64, 0.0, 0.0, 0.0, 1000.0);
        assert!(v.fuzzy_eq(1.0));
        let v = cubic_bezier_value(0.9_f64, 1000.0, 0.0, 0.0, 0.0);
        assert!(v.fuzzy_eq(1.0));
    }

    #[test]
    fn monotonic_controls_give_monotonic_values() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=50 {
            let t = i as f64 / 50.0;
            let v = cubic_bezier_value(t, 0.0, 0.5, 2.5, 3.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn extrapolates_outside_unit_range() {
        // linear configuration extrapolates linearly
        assert!(cubic_bezier_value(2.0_f64, 0.0, 1.0, 2.0, 3.0).fuzzy_eq(6.0));
        assert!(cubic_bezier_value(-1.0_f64, 0.0, 1.0, 2.0, 3.0).fuzzy_eq(-3.0));
        assert!(quadratic_bezier_value(2.0_f64, 0.0, 1.0, 2.0).fuzzy_eq(4.0));
    }
}
