//! 2D convenience facade over a single triangle [`Mesh`].
//!
//! Vertex layout (little-endian, stride 20):
//!
//!  offset  0  position  [f32; 2]   attrib 0
//!  offset  8  uv        [f32; 2]   attrib 1
//!  offset 16  color     [u8; 4]    attrib 2 (normalized)
//!
//! An untextured renderer writes `(0, 0)` for every UV. A textured renderer
//! takes UVs from a [`TextureRegion`] and requires one for every call that
//! needs UVs, except filled circles which always use `(0, 0)`.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

use anyhow::Result;

use crate::coords::Point;
use crate::paint::Color;
use crate::render::error::RenderError;
use crate::render::gl::GlBackend;
use crate::render::mesh::{Attrib, Mesh, Topology, Vertex};
use crate::render::texture::TextureRegion;

/// Attribute order of [`Vertex2D`].
pub const LAYOUT: [Attrib; 3] = [Attrib::Vec2, Attrib::Vec2, Attrib::Color];

/// One vertex of the 2D layout.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex2D {
    pub pos: Point,
    pub uv: Point,
    pub color: Color,
}

impl Vertex2D {
    #[inline]
    pub const fn new(pos: Point, uv: Point, color: Color) -> Self {
        Self { pos, uv, color }
    }
}

impl Vertex for Vertex2D {
    fn write<G: GlBackend>(&self, mesh: &mut Mesh<G>) {
        mesh.vec2(self.pos.x, self.pos.y).vec2(self.uv.x, self.uv.y).color(self.color);
    }
}

/// Renderer tuning knobs.
#[derive(Debug, Clone)]
pub struct Renderer2DConfig {
    /// Segments used by [`Renderer2D::circle`].
    pub circle_segments: u32,
}

impl Default for Renderer2DConfig {
    fn default() -> Self {
        Self { circle_segments: 50 }
    }
}

/// Immediate-mode 2D renderer.
///
/// Frame protocol: `begin → primitives → end → render`. Every call outside
/// that order returns a [`RenderError`].
pub struct Renderer2D<G: GlBackend> {
    gl: Rc<G>,
    mesh: Mesh<G>,
    program: G::Program,
    /// Fallback bound before the caller's texture; `Some` iff textured.
    missing_texture: Option<G::Texture>,
    config: Renderer2DConfig,
    building: bool,
}

impl<G: GlBackend> Renderer2D<G> {
    /// Untextured renderer: UVs are always zero and `render` binds no texture.
    pub fn colored(gl: Rc<G>, program: G::Program) -> Result<Self> {
        Self::with_config(gl, program, None, Renderer2DConfig::default())
    }

    /// Textured renderer: `missing_texture` is bound whenever no texture is given.
    pub fn textured(gl: Rc<G>, program: G::Program, missing_texture: G::Texture) -> Result<Self> {
        Self::with_config(gl, program, Some(missing_texture), Renderer2DConfig::default())
    }

    pub fn with_config(
        gl: Rc<G>,
        program: G::Program,
        missing_texture: Option<G::Texture>,
        config: Renderer2DConfig,
    ) -> Result<Self> {
        let mesh = Mesh::new(Rc::clone(&gl), Topology::Triangles, &LAYOUT)?;
        Ok(Self { gl, mesh, program, missing_texture, config, building: false })
    }

    #[inline]
    pub fn is_textured(&self) -> bool {
        self.missing_texture.is_some()
    }

    #[inline]
    pub fn is_building(&self) -> bool {
        self.building
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh<G> {
        &self.mesh
    }

    // ── frame ─────────────────────────────────────────────────────────────

    pub fn begin(&mut self) -> Result<(), RenderError> {
        if self.building {
            return Err(RenderError::AlreadyBuilding);
        }
        self.building = true;
        self.mesh.begin();
        Ok(())
    }

    pub fn end(&mut self) -> Result<(), RenderError> {
        if !self.building {
            return Err(RenderError::NotBuilding);
        }
        self.mesh.end();
        self.building = false;
        Ok(())
    }

    /// Draws the last finished frame.
    ///
    /// Textured renderers bind the fallback texture, then `texture` if given.
    pub fn render(&self, texture: Option<G::Texture>) -> Result<(), RenderError> {
        match (self.missing_texture, texture) {
            (None, Some(_)) => return Err(RenderError::TextureOnUntexturedRenderer),
            (None, None) => {}
            (Some(missing), texture) => {
                self.gl.bind_texture(Some(missing));
                if texture.is_some() {
                    self.gl.bind_texture(texture);
                }
            }
        }

        self.gl.use_program(Some(self.program));
        self.mesh.render();
        self.gl.use_program(None);
        Ok(())
    }

    // ── quads ─────────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn quad(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) -> Result<(), RenderError> {
        self.textured_quad(x, y, w, h, [color; 4], None)
    }

    /// Rectangle with per-corner colors: top-left, top-right, bottom-right, bottom-left.
    pub fn gradient_quad(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        colors: [Color; 4],
    ) -> Result<(), RenderError> {
        self.textured_quad(x, y, w, h, colors, None)
    }

    /// Rectangle with per-corner colors and an optional texture region.
    pub fn textured_quad(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        colors: [Color; 4],
        region: Option<&TextureRegion>,
    ) -> Result<(), RenderError> {
        let corners = [
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ];
        self.quad_points(corners, colors, region)
    }

    /// Solid free-form quad.
    pub fn solid_quad_points(&mut self, corners: [Point; 4], color: Color) -> Result<(), RenderError> {
        self.quad_points(corners, [color; 4], None)
    }

    /// Free-form quad; corners in top-left, top-right, bottom-right, bottom-left order.
    pub fn quad_points(
        &mut self,
        corners: [Point; 4],
        colors: [Color; 4],
        region: Option<&TextureRegion>,
    ) -> Result<(), RenderError> {
        self.ensure_building()?;
        let r = self.uv_rect(region)?;
        let uvs = [
            Point::new(r.u1, r.v1),
            Point::new(r.u2, r.v1),
            Point::new(r.u2, r.v2),
            Point::new(r.u1, r.v2),
        ];

        let a = self.mesh.emit(&Vertex2D::new(corners[0], uvs[0], colors[0]));
        let b = self.mesh.emit(&Vertex2D::new(corners[1], uvs[1], colors[1]));
        let c = self.mesh.emit(&Vertex2D::new(corners[2], uvs[2], colors[2]));
        let d = self.mesh.emit(&Vertex2D::new(corners[3], uvs[3], colors[3]));
        self.mesh.quad(a, b, c, d);
        Ok(())
    }

    /// White quad showing `region` of the bound texture.
    pub fn texture(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        region: &TextureRegion,
    ) -> Result<(), RenderError> {
        self.textured_quad(x, y, w, h, [Color::WHITE; 4], Some(region))
    }

    // ── triangles ─────────────────────────────────────────────────────────

    pub fn tri(&mut self, points: [Point; 3], color: Color) -> Result<(), RenderError> {
        self.tri_colors(points, [color; 3], None)
    }

    /// Triangle with per-vertex colors.
    ///
    /// UVs follow the quad corners: `(u1, v1)`, `(u2, v1)`, `(u2, v2)`.
    pub fn tri_colors(
        &mut self,
        points: [Point; 3],
        colors: [Color; 3],
        region: Option<&TextureRegion>,
    ) -> Result<(), RenderError> {
        self.ensure_building()?;
        let r = self.uv_rect(region)?;
        let uvs = [Point::new(r.u1, r.v1), Point::new(r.u2, r.v1), Point::new(r.u2, r.v2)];

        let a = self.mesh.emit(&Vertex2D::new(points[0], uvs[0], colors[0]));
        let b = self.mesh.emit(&Vertex2D::new(points[1], uvs[1], colors[1]));
        let c = self.mesh.emit(&Vertex2D::new(points[2], uvs[2], colors[2]));
        self.mesh.tri(a, b, c);
        Ok(())
    }

    // ── circles and lines ─────────────────────────────────────────────────

    pub fn circle(&mut self, x: f64, y: f64, r: f64, color: Color) -> Result<(), RenderError> {
        self.circle_with_segments(x, y, r, self.config.circle_segments, color)
    }

    /// Filled circle as a triangle fan.
    ///
    /// Emits the center and `segments + 1` rim vertices (the last one repeats
    /// the first), then fans over `segments + 1` vertices starting at the
    /// center. That yields `segments - 1` triangles; the wedge between the last
    /// two rim vertices is not emitted.
    pub fn circle_with_segments(
        &mut self,
        x: f64,
        y: f64,
        r: f64,
        segments: u32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ensure_building()?;
        if segments == 0 {
            return Ok(());
        }

        let center = Point::new(x, y);
        let base = self.mesh.emit(&Vertex2D::new(center, Point::zero(), color));

        let step = TAU / segments as f64;
        for i in 0..=segments {
            let rim = center.on_circle(r, i as f64 * step);
            self.mesh.emit(&Vertex2D::new(rim, Point::zero(), color));
        }

        self.mesh.triangle_fan(base, segments + 1);
        Ok(())
    }

    /// Ring of `segments` thick line quads, starting at the bottom of the circle.
    pub fn circle_outline(
        &mut self,
        x: f64,
        y: f64,
        r: f64,
        segments: u32,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ensure_building()?;
        if segments == 0 {
            return Ok(());
        }

        let center = Point::new(x, y);
        let step = TAU / segments as f64;
        let mut last = center.on_circle(r, 0.0);

        for i in 1..=segments {
            let next = center.on_circle(r, i as f64 * step);
            self.line_width(last.x, last.y, next.x, next.y, width, color)?;
            last = next;
        }
        Ok(())
    }

    /// Line segment of thickness `w` as a quad.
    pub fn line_width(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        w: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        let angle = (y2 - y1).atan2(x2 - x1) + FRAC_PI_2;
        let (sin, cos) = angle.sin_cos();
        let offset = Point::new(cos, sin) * (w / 2.0);

        let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
        self.solid_quad_points([p1 + offset, p2 + offset, p2 - offset, p1 - offset], color)
    }

    // ── private helpers ───────────────────────────────────────────────────

    fn ensure_building(&self) -> Result<(), RenderError> {
        if self.building { Ok(()) } else { Err(RenderError::NotBuilding) }
    }

    fn uv_rect(&self, region: Option<&TextureRegion>) -> Result<TextureRegion, RenderError> {
        if !self.is_textured() {
            return Ok(TextureRegion::default());
        }
        region.copied().ok_or(RenderError::MissingTextureRegion)
    }
}
