use crate::{
    core::{
        math::{
            distance, point_line_dist, point_seg_dist, point_seg_dist_squared, segs_intersect,
            Vector2,
        },
        traits::Real,
    },
    rect::Rect,
};

/// Line segment from `start` to `end`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSeg<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> LineSeg<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        LineSeg { start, end }
    }

    #[inline]
    pub fn length(&self) -> T {
        distance(self.start, self.end)
    }

    /// Distance from `point` to the closest point on the segment.
    #[inline]
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        point_seg_dist(self.start, self.end, point)
    }

    /// Squared form of [LineSeg::distance_to].
    #[inline]
    pub fn distance_squared_to(&self, point: Vector2<T>) -> T {
        point_seg_dist_squared(self.start, self.end, point)
    }

    /// Distance from `point` to the infinite line through the segment.
    #[inline]
    pub fn line_distance_to(&self, point: Vector2<T>) -> T {
        point_line_dist(self.start, self.end, point)
    }

    /// Closest point on the segment to `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::segment::*;
    /// let seg = LineSeg::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
    /// assert_eq!(seg.closest_point(Vector2::new(4.0, 3.0)), Vector2::new(4.0, 0.0));
    /// assert_eq!(seg.closest_point(Vector2::new(-4.0, 3.0)), Vector2::new(0.0, 0.0));
    /// assert_eq!(seg.closest_point(Vector2::new(14.0, 3.0)), Vector2::new(10.0, 0.0));
    /// ```
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        let dir = self.end - self.start;
        let dir_len_sq = dir.length_squared();
        if dir_len_sq == T::zero() {
            return self.start;
        }

        let t = (point - self.start).dot(dir) / dir_len_sq;
        if t <= T::zero() {
            self.start
        } else if t >= T::one() {
            self.end
        } else {
            self.start + dir.scale(t)
        }
    }

    /// Returns true if this segment touches or crosses `other`.
    #[inline]
    pub fn intersects(&self, other: &LineSeg<T>) -> bool {
        segs_intersect(self.start, self.end, other.start, other.end)
    }

    /// Returns true if this segment touches `rect`.
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        rect.intersects_line(self.start, self.end)
    }

    /// Bounding rect of the segment.
    #[inline]
    pub fn bounds(&self) -> Rect<T> {
        Rect::from_corners(self.start, self.end)
    }
}
