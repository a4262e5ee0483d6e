//! Tessera engine crate.
//!
//! Immediate-mode 2D mesh building on top of OpenGL core profile: a generic
//! interleaved [`Mesh`](render::Mesh) and the [`Renderer2D`](render::Renderer2D)
//! facade used for UI drawing.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
