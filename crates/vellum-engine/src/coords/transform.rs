use super::{Matrix3, Vec2};

/// Translation, rotation and scale of a scene node relative to its parent.
///
/// `rotation` is in degrees, counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    #[inline]
    pub const fn new(translation: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self { translation, rotation, scale }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(Vec2::zero(), 0.0, Vec2::one())
    }

    #[inline]
    pub const fn from_translation(translation: Vec2) -> Self {
        Self::new(translation, 0.0, Vec2::one())
    }

    /// Local matrix `Translate · Rotate · Scale`: scale is applied first,
    /// then rotation, then translation.
    ///
    /// Recomputed on every call.
    pub fn matrix(&self) -> Matrix3 {
        Matrix3::translate(self.translation)
            * Matrix3::rotate(self.rotation)
            * Matrix3::scale(self.scale)
    }

    #[inline]
    pub fn translate_by(&mut self, delta: Vec2) {
        self.translation = self.translation + delta;
    }

    #[inline]
    pub fn rotate_by(&mut self, degrees: f32) {
        self.rotation += degrees;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= 1e-4 && (a.y - b.y).abs() <= 1e-4
    }

    #[test]
    fn identity_yields_identity_matrix() {
        let t = Transform::identity();
        assert_eq!(t.translation, Vec2::zero());
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec2::one());
        assert_eq!(t.matrix(), Matrix3::identity());
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let t = Transform::new(Vec2::new(5.0, 0.0), 90.0, Vec2::new(2.0, 1.0));
        let expected = Matrix3::translate(Vec2::new(5.0, 0.0))
            * Matrix3::rotate(90.0)
            * Matrix3::scale(Vec2::new(2.0, 1.0));

        let p = t.matrix().transform_point(Vec2::new(1.0, 0.0));
        assert!(vec_close(p, expected.transform_point(Vec2::new(1.0, 0.0))));
        // (1,0) → scale (2,0) → rotate (0,2) → translate (5,2)
        assert!(vec_close(p, Vec2::new(5.0, 2.0)), "{p:?}");
    }

    #[test]
    fn matrix_reflects_mutation() {
        let mut t = Transform::identity();
        t.translate_by(Vec2::new(3.0, 4.0));
        t.rotate_by(180.0);
        let p = t.matrix().transform_point(Vec2::new(1.0, 0.0));
        assert!(vec_close(p, Vec2::new(2.0, 4.0)), "{p:?}");
    }
}
