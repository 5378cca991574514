//! Distance units and conversion of scalars, points, and rects between them.
mod convert;
mod distance_unit;

pub use convert::*;
pub use distance_unit::{DistanceUnit, ParseDistanceUnitError};
