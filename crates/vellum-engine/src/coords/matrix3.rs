use core::ops::Mul;

use super::Vec2;

/// 3×3 homogeneous-coordinate matrix.
///
/// Slots are named row-major:
///
/// ```text
/// | a b c |
/// | d e f |
/// | g h i |
/// ```
///
/// Points are column vectors, so `m1 * m2` applied to a point applies `m2`
/// first, then `m1`. The bottom row carries projective terms; for affine
/// matrices it is `(0, 0, 1)`.
///
/// Non-finite inputs are not guarded against: NaN/∞ propagate through every
/// operation, including a perspective divide by a tiny homogeneous `z`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    pub g: f32,
    pub h: f32,
    pub i: f32,
}

impl Matrix3 {
    /// Builds a matrix from all nine slots. Every value is taken as given,
    /// including `0.0`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a: f32, b: f32, c: f32,
        d: f32, e: f32, f: f32,
        g: f32, h: f32, i: f32,
    ) -> Self {
        Self { a, b, c, d, e, f, g, h, i }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    #[inline]
    pub const fn translate(v: Vec2) -> Self {
        Self::new(
            1.0, 0.0, v.x,
            0.0, 1.0, v.y,
            0.0, 0.0, 1.0,
        )
    }

    #[inline]
    pub const fn scale(v: Vec2) -> Self {
        Self::new(
            v.x, 0.0, 0.0,
            0.0, v.y, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Counter-clockwise rotation by `degrees`.
    #[inline]
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Standard product `m1 · m2`.
    pub fn matmul(m1: &Matrix3, m2: &Matrix3) -> Matrix3 {
        Matrix3 {
            a: m1.a * m2.a + m1.b * m2.d + m1.c * m2.g,
            b: m1.a * m2.b + m1.b * m2.e + m1.c * m2.h,
            c: m1.a * m2.c + m1.b * m2.f + m1.c * m2.i,

            d: m1.d * m2.a + m1.e * m2.d + m1.f * m2.g,
            e: m1.d * m2.b + m1.e * m2.e + m1.f * m2.h,
            f: m1.d * m2.c + m1.e * m2.f + m1.f * m2.i,

            g: m1.g * m2.a + m1.h * m2.d + m1.i * m2.g,
            h: m1.g * m2.b + m1.h * m2.e + m1.i * m2.h,
            i: m1.g * m2.c + m1.h * m2.f + m1.i * m2.i,
        }
    }

    /// Applies the matrix to `(p.x, p.y, z)`.
    ///
    /// The perspective divide only happens when the resulting `z` is non-zero,
    /// so free vectors (`z = 0`) through an affine matrix are never divided.
    pub fn transform(&self, p: Vec2, z: f32) -> Vec2 {
        let mut x = self.a * p.x + self.b * p.y + self.c * z;
        let mut y = self.d * p.x + self.e * p.y + self.f * z;
        let w = self.g * p.x + self.h * p.y + self.i * z;

        if w != 0.0 {
            x /= w;
            y /= w;
        }

        Vec2::new(x, y)
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.transform(p, 1.0)
    }

    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.transform(v, 0.0)
    }

    pub fn determinant(&self) -> f32 {
        self.a * (self.e * self.i - self.f * self.h)
            - self.b * (self.d * self.i - self.f * self.g)
            + self.c * (self.d * self.h - self.e * self.g)
    }

    /// True when the bottom row is exactly `(0, 0, 1)`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.g == 0.0 && self.h == 0.0 && self.i == 1.0
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.i]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::matmul(&self, &rhs)
    }
}
