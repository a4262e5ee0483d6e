use crate::render::gl::ComponentType;

/// Supported vertex attribute kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attrib {
    /// Two `f32` components.
    Vec2,
    /// Three `f32` components.
    Vec3,
    /// Four normalized `u8` components, R, G, B, A.
    Color,
}

impl Attrib {
    #[inline]
    pub const fn component_type(self) -> ComponentType {
        match self {
            Attrib::Vec2 | Attrib::Vec3 => ComponentType::F32,
            Attrib::Color => ComponentType::U8,
        }
    }

    #[inline]
    pub const fn component_count(self) -> u32 {
        match self {
            Attrib::Vec2 => 2,
            Attrib::Vec3 => 3,
            Attrib::Color => 4,
        }
    }

    /// Integer components are normalized to `[0, 1]` by the GPU.
    #[inline]
    pub const fn normalized(self) -> bool {
        matches!(self.component_type(), ComponentType::U8)
    }

    #[inline]
    pub const fn byte_size(self) -> u32 {
        self.component_type().size() * self.component_count()
    }
}

/// Ordered attribute list plus its stride.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    attribs: Vec<Attrib>,
    stride: u32,
}

impl VertexLayout {
    /// Returns `None` for an empty attribute list.
    pub fn new(attribs: &[Attrib]) -> Option<Self> {
        if attribs.is_empty() {
            return None;
        }
        let stride = attribs.iter().map(|a| a.byte_size()).sum();
        Some(Self { attribs: attribs.to_vec(), stride })
    }

    #[inline]
    pub fn attribs(&self) -> &[Attrib] {
        &self.attribs
    }

    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Yields `(index, attrib, byte offset)` in layout order.
    pub fn offsets(&self) -> impl Iterator<Item = (u32, Attrib, u32)> + '_ {
        self.attribs.iter().enumerate().scan(0u32, |off, (i, &a)| {
            let at = *off;
            *off += a.byte_size();
            Some((i as u32, a, at))
        })
    }
}
