use super::Rect;
use crate::core::{math::Vector2, traits::Real};

bitflags::bitflags! {
    /// Cohen-Sutherland region code: the sides of a rect a point lies outside of.
    ///
    /// `TOP` is the `min_y` side and `BOTTOM` the `max_y` side.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT = 1;
        const TOP = 2;
        const RIGHT = 4;
        const BOTTOM = 8;
    }
}

/// Upper bound on clip steps; each step fixes one coordinate to an edge so four are enough with
/// exact arithmetic, the slack absorbs rounding.
const MAX_CLIP_STEPS: usize = 8;

impl<T> Rect<T>
where
    T: Real,
{
    /// Returns the sides of the rect that `point` lies outside of.
    ///
    /// Edges count as inside. An axis with zero or negative extent sets both of its bits, so a
    /// degenerate rect reports every point as outside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::rect::*;
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert_eq!(r.outcode(Vector2::new(0.0, 0.0)), Outcode::empty());
    /// assert_eq!(r.outcode(Vector2::new(-1.0, 11.0)), Outcode::LEFT | Outcode::BOTTOM);
    /// let line = Rect::new(0.0, 0.0, 0.0, 10.0);
    /// assert_eq!(line.outcode(Vector2::new(0.0, 5.0)), Outcode::LEFT | Outcode::RIGHT);
    /// ```
    pub fn outcode(&self, point: Vector2<T>) -> Outcode {
        let mut out = Outcode::empty();
        if self.width <= T::zero() {
            out |= Outcode::LEFT | Outcode::RIGHT;
        } else if point.x < self.min_x {
            out |= Outcode::LEFT;
        } else if point.x > self.max_x() {
            out |= Outcode::RIGHT;
        }

        if self.height <= T::zero() {
            out |= Outcode::TOP | Outcode::BOTTOM;
        } else if point.y < self.min_y {
            out |= Outcode::TOP;
        } else if point.y > self.max_y() {
            out |= Outcode::BOTTOM;
        }

        out
    }

    /// Returns `true` if the line segment `p0` to `p1` touches the rect.
    ///
    /// `p0` is repeatedly clipped to the rect edge facing it until it lands inside (intersects) or
    /// both end points share an outside side (disjoint).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::rect::*;
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.intersects_line(Vector2::new(-5.0, 5.0), Vector2::new(15.0, 5.0)));
    /// assert!(!r.intersects_line(Vector2::new(-5.0, 0.0), Vector2::new(0.0, -5.0)));
    /// ```
    pub fn intersects_line(&self, p0: Vector2<T>, p1: Vector2<T>) -> bool {
        let out1 = self.outcode(p1);
        if out1.is_empty() {
            return true;
        }

        let mut p = p0;
        for step in 0..MAX_CLIP_STEPS {
            let out0 = self.outcode(p);
            if out0.is_empty() {
                log::trace!("line intersects rect after {step} clip steps");
                return true;
            }

            if out0.intersects(out1) {
                return false;
            }

            p = self.clip_to_edge(p, p1, out0);
        }

        log::trace!("line clip did not converge in {MAX_CLIP_STEPS} steps, treating as disjoint");
        false
    }

    /// Clips the line segment `p0` to `p1` to the rect, returning the part inside.
    ///
    /// The returned points keep the direction of the input segment. `None` if the segment misses
    /// the rect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::core::math::*;
    /// # use shapegeom::rect::*;
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let clipped = r.clip_line(Vector2::new(-5.0, 5.0), Vector2::new(15.0, 5.0));
    /// assert_eq!(clipped, Some((Vector2::new(0.0, 5.0), Vector2::new(10.0, 5.0))));
    /// ```
    pub fn clip_line(&self, p0: Vector2<T>, p1: Vector2<T>) -> Option<(Vector2<T>, Vector2<T>)> {
        let mut a = p0;
        let mut b = p1;
        let mut out_a = self.outcode(a);
        let mut out_b = self.outcode(b);

        for _ in 0..2 * MAX_CLIP_STEPS {
            if out_a.is_empty() && out_b.is_empty() {
                return Some((a, b));
            }

            if out_a.intersects(out_b) {
                return None;
            }

            if !out_a.is_empty() {
                a = self.clip_to_edge(a, b, out_a);
                out_a = self.outcode(a);
            } else {
                b = self.clip_to_edge(b, a, out_b);
                out_b = self.outcode(b);
            }
        }

        log::trace!("line clip did not converge in {} steps", 2 * MAX_CLIP_STEPS);
        None
    }

    /// Move `p` along the line towards `other` onto the rect edge named by `code`.
    ///
    /// Horizontal sides are resolved first. The caller guarantees `other` is not outside the same
    /// side, so the divisor is never zero.
    fn clip_to_edge(&self, p: Vector2<T>, other: Vector2<T>, code: Outcode) -> Vector2<T> {
        if code.intersects(Outcode::LEFT | Outcode::RIGHT) {
            let x = if code.contains(Outcode::RIGHT) {
                self.max_x()
            } else {
                self.min_x
            };
            let y = p.y + (x - p.x) * (other.y - p.y) / (other.x - p.x);
            Vector2::new(x, y)
        } else {
            let y = if code.contains(Outcode::BOTTOM) {
                self.max_y()
            } else {
                self.min_y
            };
            let x = p.x + (y - p.y) * (other.x - p.x) / (other.y - p.y);
            Vector2::new(x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn outcode_sides() {
        let r = square();
        assert_eq!(r.outcode(Vector2::new(5.0, 5.0)), Outcode::empty());
        assert_eq!(r.outcode(Vector2::new(10.0, 10.0)), Outcode::empty());
        assert_eq!(r.outcode(Vector2::new(-1.0, 5.0)), Outcode::LEFT);
        assert_eq!(r.outcode(Vector2::new(11.0, 5.0)), Outcode::RIGHT);
        assert_eq!(r.outcode(Vector2::new(5.0, -1.0)), Outcode::TOP);
        assert_eq!(r.outcode(Vector2::new(5.0, 11.0)), Outcode::BOTTOM);
        assert_eq!(
            r.outcode(Vector2::new(11.0, -1.0)),
            Outcode::RIGHT | Outcode::TOP
        );
    }

    #[test]
    fn degenerate_rect_sets_both_bits() {
        let r = Rect::new(0.0, 0.0, 10.0, -1.0);
        assert_eq!(
            r.outcode(Vector2::new(5.0, 0.0)),
            Outcode::TOP | Outcode::BOTTOM
        );
        // an empty rect intersects no line
        assert!(!r.intersects_line(Vector2::new(5.0, -5.0), Vector2::new(5.0, 5.0)));
    }

    #[test]
    fn line_cases() {
        let r = square();
        // end point inside
        assert!(r.intersects_line(Vector2::new(-5.0, -5.0), Vector2::new(5.0, 5.0)));
        // start point inside
        assert!(r.intersects_line(Vector2::new(5.0, 5.0), Vector2::new(50.0, 5.0)));
        // diagonal crossing a corner region needing two clip steps
        assert!(r.intersects_line(Vector2::new(-2.0, 4.0), Vector2::new(4.0, -2.0)));
        // passes by the corner
        assert!(!r.intersects_line(Vector2::new(-2.0, 1.0), Vector2::new(1.0, -2.0)));
        // fully on one side
        assert!(!r.intersects_line(Vector2::new(-2.0, 0.0), Vector2::new(-1.0, 10.0)));
        // touches the edge exactly
        assert!(r.intersects_line(Vector2::new(10.0, -5.0), Vector2::new(10.0, 15.0)));
    }

    #[test]
    fn clip_keeps_direction() {
        let r = square();
        let clipped = r.clip_line(Vector2::new(15.0, 5.0), Vector2::new(-5.0, 5.0));
        assert_eq!(
            clipped,
            Some((Vector2::new(10.0, 5.0), Vector2::new(0.0, 5.0)))
        );
    }

    #[test]
    fn clip_diagonal() {
        let r = square();
        let (a, b) = r
            .clip_line(Vector2::new(-5.0, -5.0), Vector2::new(15.0, 15.0))
            .unwrap();
        assert!(a.fuzzy_eq(Vector2::new(0.0, 0.0)));
        assert!(b.fuzzy_eq(Vector2::new(10.0, 10.0)));
        assert_eq!(
            r.clip_line(Vector2::new(-2.0, 1.0), Vector2::new(1.0, -2.0)),
            None
        );
    }

    #[test]
    fn clip_agrees_with_intersects() {
        let r = Rect::new(-3.0, 2.0, 7.0, 4.5);
        let cases = [
            (Vector2::new(-10.0, 0.0), Vector2::new(10.0, 8.0), true),
            (Vector2::new(-10.0, 0.0), Vector2::new(10.0, 1.0), false),
            (Vector2::new(0.0, -4.0), Vector2::new(1.0, 20.0), true),
            (Vector2::new(5.0, 3.0), Vector2::new(8.0, 20.0), false),
            (Vector2::new(-1.0, 3.0), Vector2::new(1.0, 4.0), true),
        ];
        for (p0, p1, expected) in cases {
            assert_eq!(r.intersects_line(p0, p1), expected, "{p0:?} {p1:?}");
            assert_eq!(r.intersects_line(p1, p0), expected, "{p1:?} {p0:?}");
            assert_eq!(r.clip_line(p0, p1).is_some(), expected, "{p0:?} {p1:?}");
        }
    }
}
