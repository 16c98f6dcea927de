use crate::coords::{Matrix3, Vec2};
use crate::paint::Color;
use crate::scene::Component;
use crate::surface::Surface;

/// Unit square centred on the owner's origin.
///
/// Size, rotation and placement come entirely from the owner's transform
/// chain: a node with scale `(40, 20)` draws a 40×20 rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSprite {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    /// Stroke width in surface pixels (not affected by the owner's scale).
    pub stroke_width: f32,
}

impl RectSprite {
    const CORNERS: [Vec2; 4] = [
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
    ];

    /// Solid rectangle without outline.
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), stroke: None, stroke_width: 1.0 }
    }

    /// Outline only.
    pub fn outlined(color: Color, width: f32) -> Self {
        Self { fill: None, stroke: Some(color), stroke_width: width }
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Corners in surface space, clockwise on screen starting top-left.
    pub fn corners(matrix: &Matrix3) -> [Vec2; 4] {
        Self::CORNERS.map(|p| matrix.transform_point(p))
    }
}

impl Component for RectSprite {
    fn draw(&self, surface: &mut dyn Surface, matrix: &Matrix3) {
        let [p0, p1, p2, p3] = Self::corners(matrix);

        surface.begin_path();
        surface.move_to(p0);
        surface.line_to(p1);
        surface.line_to(p2);
        surface.line_to(p3);
        surface.close_path();

        if let Some(fill) = self.fill {
            surface.set_fill_color(fill);
            surface.fill();
        }

        if let Some(stroke) = self.stroke {
            if self.stroke_width > 0.0 {
                surface.set_stroke_color(stroke);
                surface.set_line_width(self.stroke_width);
                surface.stroke();
            }
        }
    }
}
