//! Line segments and quadratic/cubic Bezier curve segments.
mod curve_seg;
mod line_seg;

pub use curve_seg::{CurveSeg, FlattenOptions};
pub use line_seg::LineSeg;
