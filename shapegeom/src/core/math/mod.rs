//! Scalar and vector math: distances, Bezier basis evaluation, and point to line queries.
mod base_math;
mod bezier;
mod line_dist;
mod vector2;

pub use base_math::*;
pub use bezier::{cubic_bezier_value, quadratic_bezier_value};
pub use line_dist::*;
pub use vector2::{vec2, Vector2};
