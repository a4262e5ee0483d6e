use core::ops::{Add, Mul, Neg, Sub};

/// 2D point in caller space.
///
/// Kept in `f64` at the API surface; vertex emission narrows to `f32`, which is
/// lossy for very large magnitudes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `angle` radians on a circle of radius `r` around `self`.
    ///
    /// Angle 0 points along +Y and increases towards +X (`x + sin·r, y + cos·r`).
    #[inline]
    pub fn on_circle(self, r: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x + sin * r, self.y + cos * r)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn angle_zero_points_down_y() {
        assert!(close(Point::new(1.0, 2.0).on_circle(3.0, 0.0), Point::new(1.0, 5.0)));
    }

    #[test]
    fn quarter_turn_points_along_x() {
        let p = Point::zero().on_circle(2.0, std::f64::consts::FRAC_PI_2);
        assert!(close(p, Point::new(2.0, 0.0)));
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(1.0, 2.0);
        assert_eq!(a + a, Point::new(2.0, 4.0));
        assert_eq!(a - a, Point::zero());
        assert_eq!(-(a * 2.0), Point::new(-2.0, -4.0));
    }
}
