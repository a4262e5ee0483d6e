//! Coordinate types used at the drawing API surface.
//!
//! Canonical caller space is whatever the bound shader's projection expects;
//! the 2D UI shaders use logical pixels with a top-left origin, +Y down.

mod point;

pub use point::Point;
