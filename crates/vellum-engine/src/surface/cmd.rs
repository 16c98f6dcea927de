use crate::coords::Vec2;
use crate::paint::Color;

/// One open or closed polyline of a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl SubPath {
    #[inline]
    pub fn starting_at(p: Vec2) -> Self {
        Self { points: vec![p], closed: false }
    }
}

/// Filled path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub subpaths: Vec<SubPath>,
    pub color: Color,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub subpaths: Vec<SubPath>,
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}

/// Renderer-agnostic draw command stream.
///
/// Commands are recorded in issue order; issue order is paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
}
