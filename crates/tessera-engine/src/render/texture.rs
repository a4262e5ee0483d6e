/// UV sub-rectangle of a texture atlas.
///
/// `(u1, v1)` is the top-left corner and `(u2, v2)` the bottom-right one, in
/// normalized texture coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextureRegion {
    pub u1: f64,
    pub v1: f64,
    pub u2: f64,
    pub v2: f64,
}

impl TextureRegion {
    #[inline]
    pub const fn new(u1: f64, v1: f64, u2: f64, v2: f64) -> Self {
        Self { u1, v1, u2, v2 }
    }

    /// The whole texture.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Region covering `(x, y, w, h)` pixels of an atlas of `atlas_w × atlas_h`.
    pub fn from_pixels(x: f64, y: f64, w: f64, h: f64, atlas_w: f64, atlas_h: f64) -> Self {
        Self::new(x / atlas_w, y / atlas_h, (x + w) / atlas_w, (y + h) / atlas_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_normalizes() {
        let r = TextureRegion::from_pixels(16.0, 32.0, 16.0, 32.0, 64.0, 128.0);
        assert_eq!(r, TextureRegion::new(0.25, 0.25, 0.5, 0.5));
    }
}
