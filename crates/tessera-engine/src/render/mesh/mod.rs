//! Interleaved vertex/index builder.
//!
//! A [`Mesh`] accumulates packed vertices in a CPU staging buffer and `u32`
//! indices in a list, uploads both on [`Mesh::end`], and issues a single
//! indexed draw on [`Mesh::render`].
//!
//! Frame protocol: `begin → emit vertices/indices → end → render`.
//!
//! Vertices can be written two ways:
//! - fluent: `mesh.vec2(..).vec2(..).color(..).next()`, where the caller is
//!   responsible for writing exactly one full vertex in layout order;
//! - typed: `mesh.emit(&vertex)` with a [`Vertex`] implementation, which checks
//!   the written size in debug builds.

mod attrib;
mod staging;
mod topology;

use std::rc::Rc;

use anyhow::{Context, Result};

use crate::paint::Color;
use crate::render::gl::{AttribPointer, BufferTarget, GlBackend};

pub use attrib::{Attrib, VertexLayout};
pub use topology::Topology;

use staging::StagingBuffer;

/// Mesh tuning knobs.
#[derive(Debug, Clone)]
pub struct MeshConfig {
    /// Staging capacity allocated on the first `begin`, in vertices.
    pub initial_vertex_capacity: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self { initial_vertex_capacity: 32 }
    }
}

/// A value that writes exactly one vertex in a mesh's layout order.
pub trait Vertex {
    fn write<G: GlBackend>(&self, mesh: &mut Mesh<G>);
}

/// Immediate-mode indexed mesh.
///
/// Owns its staging memory, its index list and both GPU buffers; the buffers
/// are deleted on drop. Not thread-safe: use it on the context's thread only.
pub struct Mesh<G: GlBackend> {
    gl: Rc<G>,

    layout: VertexLayout,
    topology: Topology,
    config: MeshConfig,

    staging: StagingBuffer,
    indices: Vec<u32>,
    vertex_count: u32,
    open: bool,

    vbo: G::Buffer,
    ibo: G::Buffer,
    index_count: u32,
}

impl<G: GlBackend> Mesh<G> {
    pub fn new(gl: Rc<G>, topology: Topology, attribs: &[Attrib]) -> Result<Self> {
        Self::with_config(gl, topology, attribs, MeshConfig::default())
    }

    /// Creates the GPU buffers. Staging memory is allocated lazily on `begin`.
    pub fn with_config(
        gl: Rc<G>,
        topology: Topology,
        attribs: &[Attrib],
        config: MeshConfig,
    ) -> Result<Self> {
        let layout = VertexLayout::new(attribs).context("mesh needs at least one attribute")?;
        anyhow::ensure!(
            config.initial_vertex_capacity > 0,
            "initial vertex capacity must be non-zero"
        );

        let vbo = gl.create_buffer().context("failed to create vertex buffer")?;
        let ibo = match gl.create_buffer() {
            Ok(ibo) => ibo,
            Err(e) => {
                gl.delete_buffer(vbo);
                return Err(e.context("failed to create index buffer"));
            }
        };

        log::debug!(
            "mesh created: topology={:?} attribs={:?} stride={}",
            topology,
            layout.attribs(),
            layout.stride()
        );

        Ok(Self {
            gl,
            layout,
            topology,
            config,
            staging: StagingBuffer::default(),
            indices: Vec::new(),
            vertex_count: 0,
            open: false,
            vbo,
            ibo,
            index_count: 0,
        })
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Opens a frame: resets the vertex counter, the index list and the
    /// staging cursor. Staging capacity is kept from previous frames.
    pub fn begin(&mut self) {
        debug_assert!(!self.open, "Mesh::begin called twice");

        let initial = self.config.initial_vertex_capacity as usize * self.stride_bytes();
        self.staging.ensure_allocated(initial);
        self.staging.rewind();
        self.indices.clear();
        self.vertex_count = 0;
        self.open = true;
    }

    /// Uploads this frame's vertices and indices. No-op if `begin` never ran.
    pub fn end(&mut self) {
        if !self.staging.is_allocated() {
            return;
        }
        debug_assert!(self.open, "Mesh::end called without begin");
        debug_assert!(
            self.indices.iter().all(|&i| i < self.vertex_count),
            "index out of range: {} vertices emitted",
            self.vertex_count
        );
        debug_assert_eq!(
            self.indices.len() % self.topology.indices_per_primitive() as usize,
            0,
            "partial primitive in index list"
        );

        self.gl.upload_vertex_bytes(self.vbo, self.staging.written());
        self.gl.upload_indices_u32(self.ibo, &self.indices);
        self.index_count = self.indices.len() as u32;

        log::trace!(
            "mesh end: {} vertices, {} indices, {} staged bytes",
            self.vertex_count,
            self.index_count,
            self.staging.position()
        );

        self.staging.rewind();
        self.open = false;
    }

    /// Draws the last uploaded frame. Does nothing if it had no indices.
    pub fn render(&self) {
        if self.index_count == 0 {
            return;
        }

        self.gl.bind_buffer(BufferTarget::Array, Some(self.vbo));
        self.gl.bind_buffer(BufferTarget::ElementArray, Some(self.ibo));

        self.bind_attribs();
        self.gl.draw_indexed(self.topology, self.index_count, 0);
        self.unbind_attribs();

        self.gl.bind_buffer(BufferTarget::ElementArray, None);
        self.gl.bind_buffer(BufferTarget::Array, None);
    }

    fn bind_attribs(&self) {
        let stride = self.layout.stride();
        for (index, attrib, offset) in self.layout.offsets() {
            self.gl.enable_vertex_attrib(index);
            self.gl.set_attribute_pointer(AttribPointer {
                index,
                count: attrib.component_count(),
                ty: attrib.component_type(),
                normalized: attrib.normalized(),
                stride,
                offset,
            });
        }
    }

    fn unbind_attribs(&self) {
        for index in 0..self.layout.attribs().len() as u32 {
            self.gl.disable_vertex_attrib(index);
        }
    }

    // ── vertex emitters ───────────────────────────────────────────────────

    pub fn vec2(&mut self, x: f64, y: f64) -> &mut Self {
        self.grow_for(Attrib::Vec2);
        self.staging.put_f32(x as f32);
        self.staging.put_f32(y as f32);
        self
    }

    pub fn vec3(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.grow_for(Attrib::Vec3);
        self.staging.put_f32(x as f32);
        self.staging.put_f32(y as f32);
        self.staging.put_f32(z as f32);
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.grow_for(Attrib::Color);
        self.staging.put(&color.to_bytes());
        self
    }

    /// Returns the index of the vertex just written and advances the counter.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let index = self.vertex_count;
        self.vertex_count += 1;
        index
    }

    /// Writes one full vertex and returns its index.
    pub fn emit<V: Vertex>(&mut self, vertex: &V) -> u32 {
        let start = self.staging.position();
        vertex.write(self);
        debug_assert_eq!(
            self.staging.position() - start,
            self.stride_bytes(),
            "vertex wrote a different size than the layout stride"
        );
        self.next()
    }

    fn grow_for(&mut self, attrib: Attrib) {
        debug_assert!(self.open, "vertex emitted outside begin/end");
        if self.staging.reserve(attrib.byte_size() as usize) {
            log::debug!("mesh staging grown to {} bytes", self.staging.capacity());
        }
    }

    // ── index emitters ────────────────────────────────────────────────────

    pub fn line(&mut self, a: u32, b: u32) {
        self.indices.extend_from_slice(&[a, b]);
    }

    pub fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Two triangles sharing the `a–c` edge.
    pub fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, c, c, d, a]);
    }

    /// Fan over `length` consecutive vertices starting at `start`:
    /// `length - 2` triangles `[start, start+k+1, start+k+2]`.
    pub fn triangle_fan(&mut self, start: u32, length: u32) {
        for k in 0..length.saturating_sub(2) {
            self.indices.extend_from_slice(&[start, start + k + 1, start + k + 2]);
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    #[inline]
    pub fn attribs(&self) -> &[Attrib] {
        self.layout.attribs()
    }

    #[inline]
    pub fn stride(&self) -> u32 {
        self.layout.stride()
    }

    #[inline]
    fn stride_bytes(&self) -> usize {
        self.layout.stride() as usize
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Index count of the last upload.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Indices emitted in the current frame.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Bytes written in the current frame.
    #[inline]
    pub fn staged_bytes(&self) -> &[u8] {
        self.staging.written()
    }

    #[inline]
    pub fn staging_capacity(&self) -> usize {
        self.staging.capacity()
    }
}

impl<G: GlBackend> Drop for Mesh<G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.vbo);
        self.gl.delete_buffer(self.ibo);
    }
}
