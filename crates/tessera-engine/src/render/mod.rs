//! GPU rendering subsystem.
//!
//! Renderers build geometry on the CPU and issue OpenGL commands through a
//! [`GlBackend`]. Each renderer owns its GPU buffers; shader programs and
//! textures are borrowed handles.
//!
//! Convention:
//! - Everything runs on the thread that owns the GL context.
//! - Indices are `u32`; one indexed draw per mesh per frame.

mod error;
pub mod gl;
mod glow_backend;
pub mod mesh;
pub mod renderer2d;
mod renderers;
mod texture;

#[cfg(test)]
pub(crate) mod recording;

pub use error::RenderError;
pub use gl::GlBackend;
pub use glow_backend::GlowBackend;
pub use mesh::{Attrib, Mesh, MeshConfig, Topology, Vertex};
pub use renderer2d::{Renderer2D, Renderer2DConfig, Vertex2D};
pub use renderers::Renderers2D;
pub use texture::TextureRegion;
