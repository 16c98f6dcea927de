//! Immediate-mode drawing surface.
//!
//! Components draw through the [`Surface`] trait only: path construction plus
//! fill/stroke with settable paint. [`Canvas`] is the engine's implementation;
//! it records commands into a [`DrawList`] that the GPU path renderer consumes.

mod canvas;
mod cmd;
mod list;

pub use canvas::Canvas;
pub use cmd::{DrawCmd, FillCmd, StrokeCmd, SubPath};
pub use list::DrawList;

use crate::coords::Vec2;
use crate::paint::Color;

/// 2D path-drawing context handed to [`Component::draw`](crate::scene::Component::draw).
///
/// Coordinates are already in surface space: components map their local
/// geometry through the accumulated matrix before calling in.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);

    /// Fills the current path with the fill color.
    fn fill(&mut self);

    /// Strokes the current path with the stroke color and line width.
    fn stroke(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
}
