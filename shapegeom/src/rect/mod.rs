//! Axis aligned rects: containment, outcodes, line clipping, intersection, union, bounds growing,
//! and a spatial index for hit testing groups of shapes.
mod outcode;
mod rect_core;
mod rect_index;

pub use outcode::Outcode;
pub use rect_core::*;
pub use rect_index::{RectIndex, RectIndexError};
