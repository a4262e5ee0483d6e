//! Paint model shared between renderers and callers.
//!
//! Colors are byte RGBA, matching the packed vertex color attribute.

pub mod color;

pub use color::Color;
