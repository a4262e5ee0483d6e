use std::fmt;

/// Programmer-facing misuse of the frame protocol.
///
/// These are never retried; they indicate an integration bug in the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// `begin` while a frame is already open.
    AlreadyBuilding,
    /// `end` or a primitive call without an open frame.
    NotBuilding,
    /// A texture was passed to `render` on an untextured renderer.
    TextureOnUntexturedRenderer,
    /// A textured renderer was asked to emit UVs without a region.
    MissingTextureRegion,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RenderError::AlreadyBuilding => "Renderer2D::begin called twice",
            RenderError::NotBuilding => "Renderer2D used without calling begin",
            RenderError::TextureOnUntexturedRenderer => {
                "rendering with a texture on an untextured renderer"
            }
            RenderError::MissingTextureRegion => "textured renderer needs a texture region",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for RenderError {}
