/// Straight-alpha sRGB color stored as bytes.
///
/// This is the exact representation written into vertex streams: four
/// consecutive bytes in R, G, B, A order, normalized to `[0, 1]` by the GPU.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a color from `f32` components in `[0, 1]`.
    ///
    /// Out-of-range and non-finite inputs are clamped (NaN maps to 0).
    #[inline]
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_rgba_order() {
        assert_eq!(Color::new(1, 2, 3, 4).to_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn from_f32_clamps() {
        assert_eq!(Color::from_rgba_f32(2.0, -1.0, 0.5, f32::NAN), Color::new(255, 0, 128, 0));
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(Color::WHITE.a, 255);
        assert_eq!(Color::rgb(9, 9, 9).with_alpha(10), Color::new(9, 9, 9, 10));
    }
}
