use std::sync::Arc;

use anyhow::{Result, anyhow};
use glow::HasContext;

use super::gl::{AttribPointer, BufferTarget, BufferUsage, GlBackend};
use super::mesh::Topology;

/// [`GlBackend`] over a `glow` OpenGL (core profile) context.
///
/// Core profile rejects attribute pointers without a bound vertex array, so the
/// backend creates one at construction, binds it, and deletes it on drop. Hosts
/// sharing the context must not rebind a different VAO between `Mesh::render`
/// calls without restoring this one (see [`GlowBackend::bind_vertex_array`]).
pub struct GlowBackend {
    gl: Arc<glow::Context>,
    vao: glow::NativeVertexArray,
}

impl GlowBackend {
    /// # Safety
    ///
    /// `gl` must belong to a context that is current on this thread, and must
    /// stay current for every call made through the returned backend.
    pub unsafe fn new(gl: Arc<glow::Context>) -> Result<Self> {
        let vao = unsafe { gl.create_vertex_array() }
            .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
        unsafe { gl.bind_vertex_array(Some(vao)) };
        log::debug!("glow backend ready (vao {:?})", vao);
        Ok(Self { gl, vao })
    }

    #[inline]
    pub fn context(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// Rebinds the backend's vertex array object.
    pub fn bind_vertex_array(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vao)) };
    }
}

impl Drop for GlowBackend {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.vao) };
    }
}

impl GlBackend for GlowBackend {
    type Buffer = glow::NativeBuffer;
    type Texture = glow::NativeTexture;
    type Program = glow::NativeProgram;

    fn create_buffer(&self) -> Result<Self::Buffer> {
        unsafe { self.gl.create_buffer() }.map_err(|e| anyhow!("glCreateBuffer failed: {e}"))
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) };
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(target.to_gl(), buffer) };
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe { self.gl.buffer_data_u8_slice(target.to_gl(), data, usage.to_gl()) };
    }

    fn enable_vertex_attrib(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) };
    }

    fn disable_vertex_attrib(&self, index: u32) {
        unsafe { self.gl.disable_vertex_attrib_array(index) };
    }

    fn set_attribute_pointer(&self, p: AttribPointer) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                p.index,
                p.count as i32,
                p.ty.to_gl(),
                p.normalized,
                p.stride as i32,
                p.offset as i32,
            )
        };
    }

    fn draw_indexed(&self, topology: Topology, count: u32, offset: u32) {
        unsafe {
            self.gl.draw_elements(topology.to_gl(), count as i32, glow::UNSIGNED_INT, offset as i32)
        };
    }

    fn bind_texture(&self, texture: Option<Self::Texture>) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture) };
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) };
    }
}
