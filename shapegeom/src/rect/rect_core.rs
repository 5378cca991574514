use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Axis aligned rectangle stored as a minimum corner plus width and height.
///
/// A rect with a negative width or height is *non-existent*. It is not an error: the convention
/// marks bounds that have not been initialized yet, and [Rect::union] and [Rect::update_bounds]
/// treat it as an identity. Code that accumulates bounds should prefer `Option<Rect>` (see
/// [update_bounds] and [bounds_union]); [Rect::existing] converts sentinel carrying data into that
/// form.
///
/// The y axis is not assumed to point up or down; "top" in [super::Outcode] simply means the
/// `min_y` side.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min_x: T, min_y: T, width: T, height: T) -> Self {
        Rect {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Create the smallest rect with `p0` and `p1` as opposite corners (in any order).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::rect::*;
    /// let r = Rect::from_corners(Vector2::new(4.0, -1.0), Vector2::new(1.0, 3.0));
    /// assert_eq!(r, Rect::new(1.0, -1.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub fn from_corners(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        let min_x = num_traits::real::Real::min(p0.x, p1.x);
        let min_y = num_traits::real::Real::min(p0.y, p1.y);
        Rect::new(
            min_x,
            min_y,
            num_traits::real::Real::max(p0.x, p1.x) - min_x,
            num_traits::real::Real::max(p0.y, p1.y) - min_y,
        )
    }

    /// Zero size rect located at `point`.
    #[inline]
    pub fn at_point(point: Vector2<T>) -> Self {
        Rect::new(point.x, point.y, T::zero(), T::zero())
    }

    /// The canonical non-existent rect `(0, 0, -1, -1)`.
    #[inline]
    pub fn non_existent() -> Self {
        Rect::new(T::zero(), T::zero(), -T::one(), -T::one())
    }

    /// Returns `false` if width or height is negative (or NaN).
    #[inline]
    pub fn exists(&self) -> bool {
        self.width >= T::zero() && self.height >= T::zero()
    }

    /// `Some(self)` if the rect exists, `None` for the non-existent sentinel.
    #[inline]
    pub fn existing(self) -> Option<Self> {
        if self.exists() {
            Some(self)
        } else {
            None
        }
    }

    /// Returns `true` if the rect encloses no area (width or height `<= 0`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > T::zero() && self.height > T::zero())
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.min_x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.min_y + self.height
    }

    #[inline]
    pub fn min(&self) -> Vector2<T> {
        Vector2::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn max(&self) -> Vector2<T> {
        Vector2::new(self.max_x(), self.max_y())
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(
            self.min_x + self.width / T::two(),
            self.min_y + self.height / T::two(),
        )
    }

    /// Returns `true` if `point` is inside the rect.
    ///
    /// The min edges are inclusive and the max edges exclusive, so rects tiling the plane never
    /// both claim a point. An empty rect contains nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::rect::*;
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains_point(Vector2::new(0.0, 0.0)));
    /// assert!(r.contains_point(Vector2::new(9.5, 3.0)));
    /// assert!(!r.contains_point(Vector2::new(10.0, 3.0)));
    /// ```
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        point.x >= self.min_x
            && point.y >= self.min_y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Returns `true` if `other` lies entirely within this rect. Empty rects neither contain nor
    /// are contained.
    #[inline]
    pub fn contains_rect(&self, other: &Rect<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns `true` if the interiors of the two rects overlap. Rects that only share an edge do
    /// not intersect by this test (see [Rect::intersection] for the closed form).
    #[inline]
    pub fn intersects_rect(&self, other: &Rect<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.max_x() > self.min_x
            && other.max_y() > self.min_y
            && other.min_x < self.max_x()
            && other.min_y < self.max_y()
    }

    /// Returns the overlapping region of `self` and `other`.
    ///
    /// `None` if the computed width or height would be negative, which includes any case where
    /// either input is non-existent. Rects sharing only an edge produce a zero width (or height)
    /// rect. The operation is commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::rect::*;
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(5.0, -5.0, 10.0, 10.0);
    /// assert_eq!(a.intersection(&b), Some(Rect::new(5.0, 0.0, 5.0, 5.0)));
    /// assert_eq!(a.intersection(&Rect::new(20.0, 0.0, 1.0, 1.0)), None);
    /// ```
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let x0 = num_traits::real::Real::max(self.min_x, other.min_x);
        let y0 = num_traits::real::Real::max(self.min_y, other.min_y);
        let x1 = num_traits::real::Real::min(self.max_x(), other.max_x());
        let y1 = num_traits::real::Real::min(self.max_y(), other.max_y());

        let width = x1 - x0;
        let height = y1 - y0;
        if !(width >= T::zero() && height >= T::zero()) || !self.exists() || !other.exists() {
            return None;
        }

        Some(Rect::new(x0, y0, width, height))
    }

    /// Returns the smallest rect covering both `self` and `other`.
    ///
    /// A non-existent rect is an identity: `union(non_existent, r) == r` and
    /// `union(r, non_existent) == r`. If both are non-existent `other` is returned as is, callers
    /// should not depend on its dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::rect::*;
    /// let a = Rect::new(0.0, 0.0, 1.0, 1.0);
    /// let b = Rect::new(3.0, -2.0, 1.0, 1.0);
    /// assert_eq!(a.union(&b), Rect::new(0.0, -2.0, 4.0, 3.0));
    /// assert_eq!(Rect::non_existent().union(&b), b);
    /// ```
    pub fn union(&self, other: &Rect<T>) -> Rect<T> {
        if !self.exists() {
            return *other;
        }

        if !other.exists() {
            return *self;
        }

        let x0 = num_traits::real::Real::min(self.min_x, other.min_x);
        let y0 = num_traits::real::Real::min(self.min_y, other.min_y);
        let x1 = num_traits::real::Real::max(self.max_x(), other.max_x());
        let y1 = num_traits::real::Real::max(self.max_y(), other.max_y());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Grow the rect to include `point`.
    ///
    /// A non-existent rect means the bounds are not initialized yet and the result is the zero
    /// size rect at `point`.
    pub fn update_bounds(&self, point: Vector2<T>) -> Rect<T> {
        if !self.exists() {
            return Rect::at_point(point);
        }

        let x0 = num_traits::real::Real::min(self.min_x, point.x);
        let y0 = num_traits::real::Real::min(self.min_y, point.y);
        let x1 = num_traits::real::Real::max(self.max_x(), point.x);
        let y1 = num_traits::real::Real::max(self.max_y(), point.y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Shift the rect by `offset`.
    #[inline]
    pub fn translate(&self, offset: Vector2<T>) -> Rect<T> {
        Rect::new(
            self.min_x + offset.x,
            self.min_y + offset.y,
            self.width,
            self.height,
        )
    }

    /// Scale the rect about `origin`, `sx` and `sy` applied to each axis independently.
    ///
    /// Negative factors mirror the rect and the result is normalized so it still exists.
    pub fn scale_about(&self, origin: Vector2<T>, sx: T, sy: T) -> Rect<T> {
        let p0 = Vector2::new(
            origin.x + (self.min_x - origin.x) * sx,
            origin.y + (self.min_y - origin.y) * sy,
        );
        let p1 = Vector2::new(
            origin.x + (self.max_x() - origin.x) * sx,
            origin.y + (self.max_y() - origin.y) * sy,
        );
        Rect::from_corners(p0, p1)
    }

    /// Grow (or shrink with negative values) every side by `dx` horizontally and `dy` vertically.
    #[inline]
    pub fn inflate(&self, dx: T, dy: T) -> Rect<T> {
        Rect::new(
            self.min_x - dx,
            self.min_y - dy,
            self.width + dx + dx,
            self.height + dy + dy,
        )
    }

    /// Fuzzy equal comparison of every field using `fuzzy_epsilon`.
    pub fn fuzzy_eq_eps(&self, other: &Rect<T>, fuzzy_epsilon: T) -> bool {
        self.min_x.fuzzy_eq_eps(other.min_x, fuzzy_epsilon)
            && self.min_y.fuzzy_eq_eps(other.min_y, fuzzy_epsilon)
            && self.width.fuzzy_eq_eps(other.width, fuzzy_epsilon)
            && self.height.fuzzy_eq_eps(other.height, fuzzy_epsilon)
    }

    /// Same as [Rect::fuzzy_eq_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Rect<T>) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Convert to the min/max box type used by [static_aabb2d_index].
    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.min_x, self.min_y, self.max_x(), self.max_y())
    }
}

impl<T> From<AABB<T>> for Rect<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        Rect::new(
            aabb.min_x,
            aabb.min_y,
            aabb.max_x - aabb.min_x,
            aabb.max_y - aabb.min_y,
        )
    }
}

/// Grow `current` bounds to include `point`, `None` meaning not yet initialized.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// # use shapegeom::rect::*;
/// let b = update_bounds(None, Vector2::new(2.0, 3.0));
/// assert_eq!(b, Rect::new(2.0, 3.0, 0.0, 0.0));
/// let b = update_bounds(Some(b), Vector2::new(-1.0, 5.0));
/// assert_eq!(b, Rect::new(-1.0, 3.0, 3.0, 2.0));
/// ```
#[inline]
pub fn update_bounds<T>(current: Option<Rect<T>>, point: Vector2<T>) -> Rect<T>
where
    T: Real,
{
    match current {
        Some(r) => r.update_bounds(point),
        None => Rect::at_point(point),
    }
}

/// Union of two optional bounds, `None` acting as the identity.
#[inline]
pub fn bounds_union<T>(a: Option<Rect<T>>, b: Option<Rect<T>>) -> Option<Rect<T>>
where
    T: Real,
{
    match (a.and_then(Rect::existing), b.and_then(Rect::existing)) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (Some(r), None) | (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

/// Smallest rect containing every point, `None` if `points` is empty.
///
/// # Examples
///
/// ```
/// # use shapegeom::core::math::*;
/// # use shapegeom::rect::*;
/// let pts = [Vector2::new(1.0, 1.0), Vector2::new(-2.0, 4.0), Vector2::new(0.0, -1.0)];
/// assert_eq!(bounds_of_points(pts), Some(Rect::new(-2.0, -1.0, 3.0, 5.0)));
/// assert_eq!(bounds_of_points(Vec::<Vector2>::new()), None);
/// ```
pub fn bounds_of_points<T, I>(points: I) -> Option<Rect<T>>
where
    T: Real,
    I: IntoIterator<Item = Vector2<T>>,
{
    points
        .into_iter()
        .fold(None, |acc, p| Some(update_bounds(acc, p)))
}
