use std::rc::Rc;

use anyhow::{Context, Result};

use super::gl::GlBackend;
use super::renderer2d::Renderer2D;

/// The two shared 2D renderers of a GL context.
///
/// Built once after the context is created and handed to whatever draws UI,
/// instead of living in process globals. Dropping it releases both meshes.
pub struct Renderers2D<G: GlBackend> {
    /// Solid-color geometry.
    pub color: Renderer2D<G>,
    /// Textured geometry sampling the bound texture.
    pub texture: Renderer2D<G>,
}

impl<G: GlBackend> Renderers2D<G> {
    /// `program` is the position/uv/color shader shared by both renderers.
    pub fn new(gl: Rc<G>, program: G::Program, missing_texture: G::Texture) -> Result<Self> {
        let color =
            Renderer2D::colored(Rc::clone(&gl), program).context("failed to create color renderer")?;
        let texture = Renderer2D::textured(gl, program, missing_texture)
            .context("failed to create texture renderer")?;
        log::info!("2D renderers initialized");
        Ok(Self { color, texture })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::error::RenderError;
    use crate::render::recording::RecordingGl;

    #[test]
    fn pair_has_one_textured_renderer() {
        let gl = Rc::new(RecordingGl::new());
        let r = Renderers2D::new(gl, 1, 2).unwrap();
        assert!(!r.color.is_textured());
        assert!(r.texture.is_textured());
        assert_eq!(r.color.render(Some(3)), Err(RenderError::TextureOnUntexturedRenderer));
    }

    #[test]
    fn renderers_own_separate_buffers() {
        let gl = Rc::new(RecordingGl::new());
        let _r = Renderers2D::new(Rc::clone(&gl), 1, 2).unwrap();
        assert_eq!(gl.calls().len(), 4);
    }

    #[test]
    fn creation_failure_has_context() {
        let gl = Rc::new(RecordingGl::new());
        gl.fail_create_after(2);
        let err = Renderers2D::new(gl, 1, 2).err().unwrap();
        assert!(format!("{err:#}").contains("texture renderer"));
    }
}
