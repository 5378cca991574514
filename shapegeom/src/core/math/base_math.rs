use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// assert_eq!(min_max(8, 4), (4, 8));
/// assert_eq!(min_max(-1.5, 2.0), (-1.5, 2.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Euclidean distance between the points `p0` and `p1`.
///
/// Computed with `hypot` so coordinates with very large or very small magnitudes do not overflow
/// or underflow in the intermediate squares. Symmetric in its arguments and `0` for coincident
/// points.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// let a = Vector2::new(1.0, 1.0);
/// let b = Vector2::new(4.0, 5.0);
/// assert_eq!(distance(a, b), 5.0);
/// assert_eq!(distance(b, a), 5.0);
/// assert_eq!(distance(a, a), 0.0);
/// ```
#[inline]
pub fn distance<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x).hypot(p1.y - p0.y)
}

/// Distance squared between the points `p0` and `p1`. No square root is taken, use for
/// comparisons.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Angle in radians of the direction vector described by `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4`.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// # use shapegeom::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Returns the point on the line going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn distance_is_symmetric() {
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(-3.5, 7.25),
            Vector2::new(1e150, -1e150),
            Vector2::new(1e-160, 2e-160),
        ];
        for &a in &pts {
            for &b in &pts {
                assert_eq!(distance(a, b), distance(b, a));
            }
            assert_eq!(distance(a, a), 0.0);
            assert_eq!(dist_squared(a, a), 0.0);
        }
    }

    #[test]
    fn distance_large_magnitude() {
        let a: Vector2 = Vector2::new(-1e200, 0.0);
        let b = Vector2::new(1e200, 0.0);
        assert!(distance(a, b).fuzzy_eq_eps(2e200, 1e190));
    }

    #[test]
    fn distance_tiny_magnitude() {
        let a: Vector2 = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3e-200, 4e-200);
        let d = distance(a, b);
        assert!(d > 0.0);
        assert!((d / 5e-200).fuzzy_eq(1.0));
    }

    #[test]
    fn angle_and_point_on_circle_agree() {
        let center: Vector2 = Vector2::new(2.0, -1.0);
        let p = point_on_circle(3.0, center, 1.2);
        assert!(angle(center, p).fuzzy_eq(1.2));
        assert!(distance(center, p).fuzzy_eq(3.0));
    }

    #[test]
    fn parametric_points() {
        let p0 = Vector2::new(1.0, 1.0);
        let p1 = Vector2::new(3.0, 5.0);
        assert_eq!(point_from_parametric(p0, p1, 0.0), p0);
        assert_eq!(point_from_parametric(p0, p1, 1.0), p1);
        assert_eq!(point_from_parametric(p0, p1, 0.5), midpoint(p0, p1));
    }
}
