//! GPU backend seam.
//!
//! The mesh builder talks to the GPU only through [`GlBackend`]. The production
//! implementation is [`GlowBackend`](super::GlowBackend); tests use an in-memory
//! recorder.
//!
//! All methods assume the backend's context is current on the calling thread.

use anyhow::Result;

use super::mesh::Topology;

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`
    ElementArray,
}

impl BufferTarget {
    #[inline]
    pub const fn to_gl(self) -> u32 {
        match self {
            BufferTarget::Array => glow::ARRAY_BUFFER,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Buffer usage hint passed on upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferUsage {
    /// `GL_DYNAMIC_DRAW`; contents respecified every frame.
    DynamicDraw,
}

impl BufferUsage {
    #[inline]
    pub const fn to_gl(self) -> u32 {
        match self {
            BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        }
    }
}

/// Scalar type of a vertex attribute component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComponentType {
    F32,
    U8,
}

impl ComponentType {
    /// Size of one component in bytes.
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            ComponentType::F32 => 4,
            ComponentType::U8 => 1,
        }
    }

    #[inline]
    pub const fn to_gl(self) -> u32 {
        match self {
            ComponentType::F32 => glow::FLOAT,
            ComponentType::U8 => glow::UNSIGNED_BYTE,
        }
    }
}

/// Attribute pointer configuration for one enabled vertex array.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttribPointer {
    pub index: u32,
    pub count: u32,
    pub ty: ComponentType,
    pub normalized: bool,
    pub stride: u32,
    pub offset: u32,
}

/// Minimal OpenGL surface required by [`Mesh`](super::Mesh) and
/// [`Renderer2D`](super::Renderer2D).
///
/// Handles are opaque and `Copy`; ownership is tracked by the caller that
/// created them.
pub trait GlBackend {
    type Buffer: Copy + Eq + std::fmt::Debug;
    type Texture: Copy + Eq + std::fmt::Debug;
    type Program: Copy + Eq + std::fmt::Debug;

    fn create_buffer(&self) -> Result<Self::Buffer>;
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);

    /// Respecifies the store of the buffer currently bound to `target`.
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    fn enable_vertex_attrib(&self, index: u32);
    fn disable_vertex_attrib(&self, index: u32);
    fn set_attribute_pointer(&self, pointer: AttribPointer);

    /// Indexed draw with `u32` indices from the bound element array buffer.
    ///
    /// `offset` is in bytes.
    fn draw_indexed(&self, topology: Topology, count: u32, offset: u32);

    fn bind_texture(&self, texture: Option<Self::Texture>);
    fn use_program(&self, program: Option<Self::Program>);

    /// Binds `buffer`, uploads packed vertex bytes, and unbinds.
    fn upload_vertex_bytes(&self, buffer: Self::Buffer, bytes: &[u8]) {
        self.bind_buffer(BufferTarget::Array, Some(buffer));
        self.buffer_data(BufferTarget::Array, bytes, BufferUsage::DynamicDraw);
        self.bind_buffer(BufferTarget::Array, None);
    }

    /// Binds `buffer`, uploads `u32` indices in native byte order, and unbinds.
    fn upload_indices_u32(&self, buffer: Self::Buffer, indices: &[u32]) {
        self.bind_buffer(BufferTarget::ElementArray, Some(buffer));
        self.buffer_data(
            BufferTarget::ElementArray,
            bytemuck::cast_slice(indices),
            BufferUsage::DynamicDraw,
        );
        self.bind_buffer(BufferTarget::ElementArray, None);
    }
}
