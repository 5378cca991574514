use crate::{
    core::{
        math::{cubic_bezier_value, quadratic_bezier_value, Vector2},
        traits::Real,
    },
    rect::{bounds_of_points, Rect},
};

/// Options for [CurveSeg::flatten].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlattenOptions {
    /// Number of line segments to approximate the curve with. Values below 1 are treated as 1 and
    /// values above [FlattenOptions::MAX_SEGMENT_COUNT] as that maximum.
    pub segment_count: usize,
}

impl FlattenOptions {
    /// Upper limit applied to [FlattenOptions::segment_count].
    pub const MAX_SEGMENT_COUNT: usize = 1 << 16;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment count actually used, clamped to `1..=MAX_SEGMENT_COUNT`.
    #[inline]
    pub fn effective_segment_count(&self) -> usize {
        self.segment_count.clamp(1, Self::MAX_SEGMENT_COUNT)
    }

    /// Number of points [CurveSeg::flatten] returns with these options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::segment::*;
    /// assert_eq!(FlattenOptions { segment_count: 0 }.point_count(), 2);
    /// assert_eq!(FlattenOptions { segment_count: 4 }.point_count(), 5);
    /// assert_eq!(
    ///     FlattenOptions { segment_count: usize::MAX }.point_count(),
    ///     FlattenOptions::MAX_SEGMENT_COUNT + 1
    /// );
    /// ```
    #[inline]
    pub fn point_count(&self) -> usize {
        self.effective_segment_count() + 1
    }
}

impl Default for FlattenOptions {
    #[inline]
    fn default() -> Self {
        Self { segment_count: 16 }
    }
}

/// Quadratic or cubic Bezier curve segment.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSeg<T = f64> {
    Quadratic {
        start: Vector2<T>,
        ctrl: Vector2<T>,
        end: Vector2<T>,
    },
    Cubic {
        start: Vector2<T>,
        ctrl1: Vector2<T>,
        ctrl2: Vector2<T>,
        end: Vector2<T>,
    },
}

impl<T> CurveSeg<T>
where
    T: Real,
{
    #[inline]
    pub fn quadratic(start: Vector2<T>, ctrl: Vector2<T>, end: Vector2<T>) -> Self {
        CurveSeg::Quadratic { start, ctrl, end }
    }

    #[inline]
    pub fn cubic(start: Vector2<T>, ctrl1: Vector2<T>, ctrl2: Vector2<T>, end: Vector2<T>) -> Self {
        CurveSeg::Cubic {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match *self {
            CurveSeg::Quadratic { start, .. } | CurveSeg::Cubic { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match *self {
            CurveSeg::Quadratic { end, .. } | CurveSeg::Cubic { end, .. } => end,
        }
    }

    /// Point on the curve at parametric value `t`, each axis evaluated on its own.
    ///
    /// `t` is not range checked, see [cubic_bezier_value].
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::segment::*;
    /// let c = CurveSeg::cubic(
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(0.0, 1.0),
    ///     Vector2::new(1.0, 1.0),
    ///     Vector2::new(1.0, 0.0),
    /// );
    /// assert_eq!(c.point_at(0.0), c.start());
    /// assert_eq!(c.point_at(1.0), c.end());
    /// assert_eq!(c.point_at(0.5), Vector2::new(0.5, 0.75));
    /// ```
    pub fn point_at(&self, t: T) -> Vector2<T> {
        match *self {
            CurveSeg::Quadratic { start, ctrl, end } => Vector2::new(
                quadratic_bezier_value(t, start.x, ctrl.x, end.x),
                quadratic_bezier_value(t, start.y, ctrl.y, end.y),
            ),
            CurveSeg::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => Vector2::new(
                cubic_bezier_value(t, start.x, ctrl1.x, ctrl2.x, end.x),
                cubic_bezier_value(t, start.y, ctrl1.y, ctrl2.y, end.y),
            ),
        }
    }

    /// Split the curve at `t` into two curves of the same degree (de Casteljau).
    ///
    /// The first covers `[0, t]` and the second `[t, 1]`; they share the point at `t`.
    pub fn split_at(&self, t: T) -> (CurveSeg<T>, CurveSeg<T>) {
        match *self {
            CurveSeg::Quadratic { start, ctrl, end } => {
                let a = start.lerp(ctrl, t);
                let b = ctrl.lerp(end, t);
                let mid = a.lerp(b, t);
                (
                    CurveSeg::quadratic(start, a, mid),
                    CurveSeg::quadratic(mid, b, end),
                )
            }
            CurveSeg::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => {
                let a = start.lerp(ctrl1, t);
                let b = ctrl1.lerp(ctrl2, t);
                let c = ctrl2.lerp(end, t);
                let ab = a.lerp(b, t);
                let bc = b.lerp(c, t);
                let mid = ab.lerp(bc, t);
                (
                    CurveSeg::cubic(start, a, ab, mid),
                    CurveSeg::cubic(mid, bc, c, end),
                )
            }
        }
    }

    /// Bounds of the control points. The curve lies within its control hull so this always
    /// contains the curve, though it may be larger than the tight bounds.
    pub fn control_bounds(&self) -> Rect<T> {
        let points = match *self {
            CurveSeg::Quadratic { start, ctrl, end } => [start, ctrl, end, end],
            CurveSeg::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => [start, ctrl1, ctrl2, end],
        };

        // never empty, four points are always given
        bounds_of_points(points).unwrap_or_else(|| Rect::at_point(self.start()))
    }

    /// Approximate the curve by a polyline sampled at evenly spaced `t` values.
    ///
    /// The returned points start with [CurveSeg::start] and end with [CurveSeg::end] exactly.
    pub fn flatten(&self, options: &FlattenOptions) -> Vec<Vector2<T>> {
        let count = options.effective_segment_count();
        let count_t = T::from_f64(count as f64);
        let mut points = Vec::with_capacity(options.point_count());
        points.push(self.start());
        for i in 1..count {
            let t = T::from_f64(i as f64) / count_t;
            points.push(self.point_at(t));
        }
        points.push(self.end());
        points
    }
}
