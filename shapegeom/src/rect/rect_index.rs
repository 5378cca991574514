use super::{bounds_union, Rect};
use crate::core::{
    math::{segs_intersect, Vector2},
    traits::Real,
    Control,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use thiserror::Error;

/// Errors from building a [RectIndex].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RectIndexError {
    /// A rect had a NaN or infinite field.
    #[error("rect at position {position} has a non-finite coordinate")]
    NonFiniteRect { position: usize },
    /// The underlying spatial index rejected the input.
    #[error("failed to build spatial index: {0}")]
    Build(String),
}

/// Immutable spatial index over a group of shape bounding rects, used for hit testing.
///
/// Query results are positions in the slice the index was built from. Non-existent rects are
/// skipped when building but do not shift the positions of the rects after them.
///
/// Rects with zero width or height (such as the bounds of a single point or of a horizontal line)
/// are kept. Point and line queries treat them as the closed point or segment they cover, since
/// half open containment and outcode clipping would never report them.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// # use shapegeom::rect::*;
/// let shapes = [
///     Rect::new(0.0, 0.0, 2.0, 2.0),
///     Rect::non_existent(),
///     Rect::new(5.0, 5.0, 1.0, 1.0),
/// ];
/// let index = RectIndex::new(&shapes).unwrap();
/// assert_eq!(index.query_point(Vector2::new(5.5, 5.5)), vec![2]);
/// assert_eq!(index.query(&Rect::new(-1.0, -1.0, 10.0, 10.0)), vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RectIndex<T = f64>
where
    T: Real,
{
    index: StaticAABB2DIndex<T>,
    /// Maps spatial index item position to the caller's slice position.
    keys: Vec<usize>,
    rects: Vec<Rect<T>>,
    bounds: Option<Rect<T>>,
}

impl<T> RectIndex<T>
where
    T: Real,
{
    /// Build an index over `rects`.
    pub fn new(rects: &[Rect<T>]) -> Result<Self, RectIndexError> {
        let mut keys = Vec::with_capacity(rects.len());
        for (position, r) in rects.iter().enumerate() {
            let finite = r.min_x.is_finite_num()
                && r.min_y.is_finite_num()
                && r.width.is_finite_num()
                && r.height.is_finite_num();
            if !finite {
                return Err(RectIndexError::NonFiniteRect { position });
            }

            if r.exists() {
                keys.push(position);
            }
        }

        let mut builder = StaticAABB2DIndexBuilder::new(keys.len());
        let mut bounds = None;
        for &k in &keys {
            let r = &rects[k];
            builder.add(r.min_x, r.min_y, r.max_x(), r.max_y());
            bounds = bounds_union(bounds, Some(*r));
        }

        let index = builder
            .build()
            .map_err(|e| RectIndexError::Build(e.to_string()))?;

        log::debug!(
            "built rect index over {} rects ({} skipped as non-existent)",
            keys.len(),
            rects.len() - keys.len()
        );

        Ok(RectIndex {
            index,
            keys,
            rects: rects.to_vec(),
            bounds,
        })
    }

    /// Number of rects that were indexed (non-existent rects excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Union of all indexed rects, `None` if nothing was indexed.
    #[inline]
    pub fn bounds(&self) -> Option<Rect<T>> {
        self.bounds
    }

    /// Positions of rects whose closed area overlaps `area` (touching edges count), ascending.
    pub fn query(&self, area: &Rect<T>) -> Vec<usize> {
        let mut result = self.query_unsorted(area);
        result.sort_unstable();
        result
    }

    /// Positions of rects containing `point` (see [Rect::contains_point]), ascending.
    ///
    /// A rect with zero width or height is hit by any point on its closed extent.
    pub fn query_point(&self, point: Vector2<T>) -> Vec<usize> {
        let mut result: Vec<usize> = self
            .query_unsorted(&Rect::at_point(point))
            .into_iter()
            .filter(|&i| {
                let r = &self.rects[i];
                if r.is_empty() {
                    point.x >= r.min_x
                        && point.x <= r.max_x()
                        && point.y >= r.min_y
                        && point.y <= r.max_y()
                } else {
                    r.contains_point(point)
                }
            })
            .collect();
        result.sort_unstable();
        result
    }

    /// Positions of rects touched by the line segment `p0` to `p1`, ascending.
    ///
    /// A rect with zero width or height is tested as the segment from its min to its max corner.
    pub fn query_line(&self, p0: Vector2<T>, p1: Vector2<T>) -> Vec<usize> {
        let mut result: Vec<usize> = self
            .query_unsorted(&Rect::from_corners(p0, p1))
            .into_iter()
            .filter(|&i| {
                let r = &self.rects[i];
                if r.is_empty() {
                    segs_intersect(p0, p1, r.min(), r.max())
                } else {
                    r.intersects_line(p0, p1)
                }
            })
            .collect();
        result.sort_unstable();
        result
    }

    /// Visit positions of rects overlapping `area` until `visitor` breaks.
    ///
    /// Returns the value passed to [Control::Break], or `None` if every result was visited.
    /// Visiting order is unspecified.
    pub fn visit_query<B, F>(&self, area: &Rect<T>, mut visitor: F) -> Option<B>
    where
        F: FnMut(usize) -> Control<B>,
    {
        if !area.exists() || self.keys.is_empty() {
            return None;
        }

        let mut query_visitor = |i: usize| visitor(self.keys[i]);
        let cf = self.index.visit_query(
            area.min_x,
            area.min_y,
            area.max_x(),
            area.max_y(),
            &mut query_visitor,
        );

        match cf {
            Control::Break(b) => Some(b),
            Control::Continue => None,
        }
    }

    fn query_unsorted(&self, area: &Rect<T>) -> Vec<usize> {
        if !area.exists() || self.keys.is_empty() {
            return Vec::new();
        }

        self.index
            .query(area.min_x, area.min_y, area.max_x(), area.max_y())
            .into_iter()
            .map(|i| self.keys[i])
            .collect()
    }
}
