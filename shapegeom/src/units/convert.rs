use super::DistanceUnit;
use crate::{
    core::{math::Vector2, traits::Real},
    rect::Rect,
};

/// Scale factor that converts a value in `from` units to `to` units.
///
/// The ratio is taken in `f64` before narrowing to `T`, and [convert] multiplies by exactly this
/// value.
#[inline]
pub fn conversion_factor<T>(from: DistanceUnit, to: DistanceUnit) -> T
where
    T: Real,
{
    if from == to {
        return T::one();
    }

    T::from_f64(from.meters_per_unit() / to.meters_per_unit())
}

/// Convert `value` from `from` units to `to` units.
///
/// Converting a unit to itself returns `value` untouched, no multiplication is done.
///
/// # Examples
///
/// ```
/// # use shapegeom::units::*;
/// # use shapegeom::core::traits::*;
/// assert_eq!(convert(1.0_f64, DistanceUnit::Meters, DistanceUnit::Meters), 1.0);
/// assert!(convert(1.0_f64, DistanceUnit::Feet, DistanceUnit::Inches).fuzzy_eq(12.0));
/// assert!(convert(72.0_f64, DistanceUnit::Points, DistanceUnit::Inches).fuzzy_eq(1.0));
/// ```
#[inline]
pub fn convert<T>(value: T, from: DistanceUnit, to: DistanceUnit) -> T
where
    T: Real,
{
    if from == to {
        return value;
    }

    value * conversion_factor::<T>(from, to)
}

/// Convert both coordinates of `point` from `from` units to `to` units.
#[inline]
pub fn convert_point<T>(point: Vector2<T>, from: DistanceUnit, to: DistanceUnit) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(convert(point.x, from, to), convert(point.y, from, to))
}

/// Convert every field of `rect` from `from` units to `to` units.
///
/// Each of `min_x`, `min_y`, `width`, and `height` is converted on its own; a non-existent rect
/// stays non-existent since the factor is positive.
///
/// # Examples
///
/// ```
/// # use shapegeom::rect::*;
/// # use shapegeom::units::*;
/// let r = Rect::new(1.0, 2.0, 3.0, 4.0);
/// let mm = convert_rect(r, DistanceUnit::Centimeters, DistanceUnit::Millimeters);
/// assert!(mm.fuzzy_eq(&Rect::new(10.0, 20.0, 30.0, 40.0)));
/// ```
#[inline]
pub fn convert_rect<T>(rect: Rect<T>, from: DistanceUnit, to: DistanceUnit) -> Rect<T>
where
    T: Real,
{
    Rect::new(
        convert(rect.min_x, from, to),
        convert(rect.min_y, from, to),
        convert(rect.width, from, to),
        convert(rect.height, from, to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn identity_is_exact() {
        for unit in DistanceUnit::ALL {
            for v in [1.0, 0.1, -3.3, 1e300, f64::MIN_POSITIVE] {
                assert_eq!(convert(v, unit, unit), v);
            }
            assert_eq!(conversion_factor::<f64>(unit, unit), 1.0);
        }
    }

    #[test]
    fn round_trip_all_pairs() {
        for a in DistanceUnit::ALL {
            for b in DistanceUnit::ALL {
                for v in [1.0_f64, -2.5, 1234.5678, 1e-6, 9.75e7] {
                    let back = convert(convert(v, a, b), b, a);
                    assert!(((back - v) / v).abs() < 1e-9, "{v} {a} -> {b} -> {back}");
                }
            }
        }
    }

    #[test]
    fn transitive() {
        let v = 3.75_f64;
        for a in DistanceUnit::ALL {
            for b in DistanceUnit::ALL {
                for c in DistanceUnit::ALL {
                    let via = convert(convert(v, a, b), b, c);
                    let direct = convert(v, a, c);
                    assert!(((via - direct) / direct).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn convert_uses_factor_exactly() {
        for a in DistanceUnit::ALL {
            for b in DistanceUnit::ALL {
                let f = conversion_factor::<f64>(a, b);
                for v in [1.0_f64, -2.5, 0.1, 1234.5678, 9.75e7] {
                    assert_eq!(convert(v, a, b), v * f, "{v} {a} -> {b}");
                }

                let f32_factor = conversion_factor::<f32>(a, b);
                assert_eq!(convert(0.3f32, a, b), 0.3f32 * f32_factor);
            }
        }
    }

    #[test]
    fn known_values() {
        use DistanceUnit::*;
        assert!(convert(1.0_f64, Miles, Feet).fuzzy_eq(5280.0));
        assert!(convert(1.0_f64, Yards, Feet).fuzzy_eq(3.0));
        assert!(convert(1.0_f64, Inches, Millimeters).fuzzy_eq(25.4));
        assert!(convert(1.0_f64, Picas, Points).fuzzy_eq(12.0));
        assert!(convert(2.0_f64, Kilometers, Meters).fuzzy_eq(2000.0));
        assert!(convert(1.0_f64, NauticalMiles, Meters).fuzzy_eq(1852.0));
    }

    #[test]
    fn axes_are_independent() {
        let p: Vector2 = Vector2::new(1.0, -100.0);
        let q = convert_point(p, DistanceUnit::Meters, DistanceUnit::Centimeters);
        assert!(q.fuzzy_eq(Vector2::new(100.0, -10000.0)));

        let r: Rect = Rect::new(0.0, 5.0, -1.0, 2.0);
        let c = convert_rect(r, DistanceUnit::Feet, DistanceUnit::Inches);
        assert!(!c.exists());
        assert!(c.width.fuzzy_eq(-12.0));
        assert!(c.height.fuzzy_eq(24.0));
    }

    #[test]
    fn f32_conversion() {
        let v: f32 = convert(1.0f32, DistanceUnit::Inches, DistanceUnit::Points);
        assert!((v - 72.0).abs() < 1e-3);
    }
}
