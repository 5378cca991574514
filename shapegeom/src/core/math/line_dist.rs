use super::{base_math::dist_squared, Vector2};
use crate::core::traits::Real;

/// Squared perpendicular distance from `point` to the infinite line through `p0` and `p1`.
///
/// The point relative vector is projected onto the line direction and the squared projection
/// length is removed from its squared length. The result is clamped at zero since rounding can
/// leave a tiny negative value for points on the line. If `p0` and `p1` coincide there is no
/// direction to project on and the squared distance to `p0` is returned.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(1.0, 0.0);
/// // the line extends past the segment end points
/// assert_eq!(point_line_dist_squared(p0, p1, Vector2::new(5.0, 2.0)), 4.0);
/// // zero length line falls back to point distance
/// assert_eq!(point_line_dist_squared(p0, p0, Vector2::new(3.0, 4.0)), 25.0);
/// ```
pub fn point_line_dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let dir = p1 - p0;
    let dir_len_sq = dir.length_squared();
    if dir_len_sq == T::zero() {
        return dist_squared(point, p0);
    }

    let rel = point - p0;
    let dot = rel.dot(dir);
    let proj_len_sq = dot * dot / dir_len_sq;
    let len_sq = rel.length_squared() - proj_len_sq;
    if len_sq < T::zero() {
        T::zero()
    } else {
        len_sq
    }
}

/// Perpendicular distance from `point` to the infinite line through `p0` and `p1`.
///
/// See [point_line_dist_squared].
#[inline]
pub fn point_line_dist<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    point_line_dist_squared(p0, p1, point).sqrt()
}

/// Squared distance from `point` to the closest point on the line segment `p0` to `p1`.
///
/// Three cases: the projection of `point` falls before `p0` (distance to `p0`), after `p1`
/// (distance to `p1`), or within the segment (perpendicular distance). A zero length segment
/// yields the squared distance to `p0`.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// // before start
/// assert_eq!(point_seg_dist_squared(p0, p1, Vector2::new(-3.0, 4.0)), 25.0);
/// // within
/// assert_eq!(point_seg_dist_squared(p0, p1, Vector2::new(2.0, 3.0)), 9.0);
/// // after end
/// assert_eq!(point_seg_dist_squared(p0, p1, Vector2::new(7.0, -4.0)), 25.0);
/// ```
pub fn point_seg_dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let dir = p1 - p0;
    let dir_len_sq = dir.length_squared();
    if dir_len_sq == T::zero() {
        return dist_squared(point, p0);
    }

    let mut rel = point - p0;
    let mut dot = rel.dot(dir);
    let proj_len_sq = if dot <= T::zero() {
        // before start, whole relative vector is the distance
        T::zero()
    } else {
        // measure from the end point so the "after end" case also reads as a non-positive dot
        rel = dir - rel;
        dot = rel.dot(dir);
        if dot <= T::zero() {
            T::zero()
        } else {
            dot * dot / dir_len_sq
        }
    };

    let len_sq = rel.length_squared() - proj_len_sq;
    if len_sq < T::zero() {
        T::zero()
    } else {
        len_sq
    }
}

/// Distance from `point` to the closest point on the line segment `p0` to `p1`.
///
/// See [point_seg_dist_squared].
#[inline]
pub fn point_seg_dist<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    point_seg_dist_squared(p0, p1, point).sqrt()
}

/// Returns the side of the directed segment `p0` to `p1` that `point` lies on.
///
/// * `-1` if `point` is left of the direction (counter clockwise turn, y axis up), or collinear and
///   before `p0`.
/// * `1` if `point` is right of the direction, or collinear and beyond `p1`.
/// * `0` if `point` lies on the segment.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// assert_eq!(relative_ccw(p0, p1, Vector2::new(1.0, 1.0)), -1);
/// assert_eq!(relative_ccw(p0, p1, Vector2::new(1.0, -1.0)), 1);
/// assert_eq!(relative_ccw(p0, p1, Vector2::new(1.0, 0.0)), 0);
/// assert_eq!(relative_ccw(p0, p1, Vector2::new(-1.0, 0.0)), -1);
/// assert_eq!(relative_ccw(p0, p1, Vector2::new(3.0, 0.0)), 1);
/// ```
pub fn relative_ccw<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> i32
where
    T: Real,
{
    let dir = p1 - p0;
    let rel = point - p0;
    let mut ccw = -dir.perp_dot(rel);
    if ccw == T::zero() {
        // collinear, classify by position along the line
        ccw = rel.dot(dir);
        if ccw > T::zero() {
            ccw = (rel - dir).dot(dir);
            if ccw < T::zero() {
                ccw = T::zero();
            }
        }
    }

    if ccw < T::zero() {
        -1
    } else if ccw > T::zero() {
        1
    } else {
        0
    }
}

/// Returns true if the line segment `a0` to `a1` touches or crosses the segment `b0` to `b1`.
///
/// Collinear segments intersect if they overlap or share an end point.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// let a0 = Vector2::new(0.0, 0.0);
/// let a1 = Vector2::new(2.0, 2.0);
/// assert!(segs_intersect(a0, a1, Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0)));
/// assert!(!segs_intersect(a0, a1, Vector2::new(3.0, 0.0), Vector2::new(4.0, 0.0)));
/// ```
pub fn segs_intersect<T>(a0: Vector2<T>, a1: Vector2<T>, b0: Vector2<T>, b1: Vector2<T>) -> bool
where
    T: Real,
{
    relative_ccw(a0, a1, b0) * relative_ccw(a0, a1, b1) <= 0
        && relative_ccw(b0, b1, a0) * relative_ccw(b0, b1, a1) <= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn on_segment_is_zero() {
        let p0: Vector2 = Vector2::new(1.0, 1.0);
        let p1 = Vector2::new(5.0, 3.0);
        assert_eq!(point_seg_dist(p0, p1, p0), 0.0);
        assert_eq!(point_seg_dist(p0, p1, p1), 0.0);
        assert!(point_seg_dist(p0, p1, Vector2::new(3.0, 2.0)).fuzzy_eq(0.0));
        assert!(point_line_dist(p0, p1, Vector2::new(9.0, 5.0)).fuzzy_eq(0.0));
    }

    #[test]
    fn zero_length_segment() {
        let p = Vector2::new(2.0, 2.0);
        let q = Vector2::new(5.0, 6.0);
        let d = point_seg_dist(p, p, q);
        assert_eq!(d, 5.0);
        assert_eq!(point_line_dist(p, p, q), 5.0);
        assert_eq!(point_seg_dist(p, p, p), 0.0);
    }

    #[test]
    fn never_negative_near_the_line() {
        // nearly collinear large coordinates can round the difference below zero
        let p0: Vector2 = Vector2::new(1e8, 1e8 + 1.0);
        let p1 = Vector2::new(3e8, 3e8 + 3.0);
        let p = Vector2::new(2e8, 2e8 + 2.0);
        assert!(point_line_dist_squared(p0, p1, p) >= 0.0);
        assert!(point_seg_dist_squared(p0, p1, p) >= 0.0);
        assert!(!point_line_dist(p0, p1, p).is_nan());
    }

    #[test]
    fn seg_dist_never_less_than_line_dist() {
        let segs = [
            (Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)),
            (Vector2::new(-2.0, 3.0), Vector2::new(4.0, -7.5)),
            (Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0)),
        ];
        for &(p0, p1) in &segs {
            for i in -10..=10 {
                for j in -10..=10 {
                    let p = Vector2::new(i as f64 * 1.7, j as f64 * 0.9);
                    let seg_d = point_seg_dist(p0, p1, p);
                    let line_d = point_line_dist(p0, p1, p);
                    assert!(seg_d >= line_d - 1e-9, "{seg_d} < {line_d}");
                }
            }
        }
    }

    #[test]
    fn collinear_intersections() {
        let a0 = Vector2::new(0.0, 0.0);
        let a1 = Vector2::new(2.0, 0.0);
        // overlapping
        assert!(segs_intersect(a0, a1, Vector2::new(1.0, 0.0), Vector2::new(3.0, 0.0)));
        // sharing an end point
        assert!(segs_intersect(a0, a1, a1, Vector2::new(5.0, 0.0)));
        // disjoint on the same line
        assert!(!segs_intersect(a0, a1, Vector2::new(3.0, 0.0), Vector2::new(4.0, 0.0)));
        // parallel
        assert!(!segs_intersect(a0, a1, Vector2::new(0.0, 1.0), Vector2::new(2.0, 1.0)));
    }
}
