use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Real number type every geometry function is generic over (implemented for `f32` and `f64`).
///
/// Besides arithmetic from `num_traits` it requires fuzzy ordering and the numeric bound needed to
/// store values in a [static_aabb2d_index::StaticAABB2DIndex].
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    fn two() -> Self;

    fn three() -> Self;

    /// Convert a `f64` constant (unit factors, angles) into `Self`, rounding if `Self` is
    /// narrower.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn tau() -> Self {
        Self::from_f64(std::f64::consts::TAU)
    }

    /// Returns `false` for NaN and infinite values.
    #[inline]
    fn is_finite_num(&self) -> bool {
        self.abs() <= <Self as num_traits::Bounded>::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
