/// Primitive kind the index stream is interpreted as.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Triangles,
    Lines,
}

impl Topology {
    #[inline]
    pub const fn to_gl(self) -> u32 {
        match self {
            Topology::Triangles => glow::TRIANGLES,
            Topology::Lines => glow::LINES,
        }
    }

    /// Indices consumed per primitive.
    #[inline]
    pub const fn indices_per_primitive(self) -> u32 {
        match self {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        }
    }
}
