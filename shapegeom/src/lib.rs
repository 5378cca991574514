//! 2D geometry utilities for shape and chart rendering code.
//!
//! * [core::math]: distances, Bezier evaluation, point to line and point to segment queries.
//! * [rect]: rect containment, outcodes, line clipping, intersection, union, bounds growing, and
//!   a spatial index for hit testing.
//! * [segment]: line and curve segment value types.
//! * [units]: distance units and conversion of scalars, points, and rects.
//!
//! Every function is pure and generic over [core::traits::Real] (`f32` or `f64`, defaulting to
//! `f64`), so values may be shared freely between threads.

#[macro_use]
mod macros;
pub mod core;
pub mod rect;
pub mod segment;
pub mod units;

pub use static_aabb2d_index;
