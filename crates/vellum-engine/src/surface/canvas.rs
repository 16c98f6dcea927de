use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, DrawList, FillCmd, StrokeCmd, SubPath, Surface};

/// Recording [`Surface`] that turns path calls into a [`DrawList`].
///
/// Follows 2D-canvas path semantics:
/// - `begin_path` discards the current path
/// - `move_to` starts a new sub-path
/// - `line_to` without a current sub-path behaves like `move_to`
/// - `close_path` closes the current sub-path; the next `line_to` starts a
///   fresh sub-path at the closed sub-path's first point
/// - `fill`/`stroke` snapshot the current path and paint state; the path is kept
#[derive(Debug)]
pub struct Canvas {
    path: Vec<SubPath>,
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    list: DrawList,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            list: DrawList::new(),
        }
    }

    /// Commands recorded since the last [`clear`](Self::clear).
    pub fn list(&self) -> &DrawList {
        &self.list
    }

    /// Drops recorded commands and the current path. Paint state is kept, as
    /// on a real canvas.
    pub fn clear(&mut self) {
        self.list.clear();
        self.path.clear();
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    fn drawable_path(&self) -> Vec<SubPath> {
        self.path
            .iter()
            .filter(|sp| sp.points.len() >= 2)
            .cloned()
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Canvas {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.push(SubPath::starting_at(p));
    }

    fn line_to(&mut self, p: Vec2) {
        match self.path.last_mut() {
            Some(sp) if !sp.closed => sp.points.push(p),
            Some(sp) => {
                let start = sp.points[0];
                let mut next = SubPath::starting_at(start);
                next.points.push(p);
                self.path.push(next);
            }
            None => self.move_to(p),
        }
    }

    fn close_path(&mut self) {
        if let Some(sp) = self.path.last_mut() {
            sp.closed = true;
        }
    }

    fn fill(&mut self) {
        let subpaths = self.drawable_path();
        if subpaths.is_empty() {
            return;
        }
        self.list.push(DrawCmd::Fill(FillCmd {
            subpaths,
            color: self.fill_color,
        }));
    }

    fn stroke(&mut self) {
        let subpaths = self.drawable_path();
        if subpaths.is_empty() || self.line_width <= 0.0 {
            return;
        }
        self.list.push(DrawCmd::Stroke(StrokeCmd {
            subpaths,
            color: self.stroke_color,
            width: self.line_width,
        }));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(c: &mut Canvas) {
        c.begin_path();
        c.move_to(Vec2::new(0.0, 0.0));
        c.line_to(Vec2::new(10.0, 0.0));
        c.line_to(Vec2::new(0.0, 10.0));
        c.close_path();
    }

    #[test]
    fn fill_records_path_and_color() {
        let mut c = Canvas::new();
        triangle(&mut c);
        c.set_fill_color(Color::RED);
        c.fill();

        let items = c.list().items();
        assert_eq!(items.len(), 1);
        let DrawCmd::Fill(cmd) = &items[0] else { panic!("expected fill") };
        assert_eq!(cmd.color, Color::RED);
        assert_eq!(cmd.subpaths.len(), 1);
        assert_eq!(cmd.subpaths[0].points.len(), 3);
        assert!(cmd.subpaths[0].closed);
    }

    #[test]
    fn fill_then_stroke_reuses_path() {
        let mut c = Canvas::new();
        triangle(&mut c);
        c.fill();
        c.set_line_width(3.0);
        c.set_stroke_color(Color::BLUE);
        c.stroke();

        let items = c.list().items();
        assert_eq!(items.len(), 2);
        let DrawCmd::Stroke(s) = &items[1] else { panic!("expected stroke") };
        assert_eq!(s.width, 3.0);
        assert_eq!(s.color, Color::BLUE);
        assert_eq!(s.subpaths[0].points.len(), 3);
    }

    #[test]
    fn line_to_without_move_starts_subpath() {
        let mut c = Canvas::new();
        c.line_to(Vec2::new(1.0, 1.0));
        c.line_to(Vec2::new(2.0, 2.0));
        c.stroke();
        let DrawCmd::Stroke(s) = &c.list().items()[0] else { panic!("expected stroke") };
        assert_eq!(s.subpaths[0].points, vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
    }

    #[test]
    fn line_to_after_close_starts_at_previous_origin() {
        let mut c = Canvas::new();
        triangle(&mut c);
        c.line_to(Vec2::new(5.0, 5.0));
        c.stroke();
        let DrawCmd::Stroke(s) = &c.list().items()[0] else { panic!("expected stroke") };
        assert_eq!(s.subpaths.len(), 2);
        assert_eq!(s.subpaths[1].points, vec![Vec2::zero(), Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn begin_path_discards_previous_geometry() {
        let mut c = Canvas::new();
        triangle(&mut c);
        c.begin_path();
        c.fill();
        assert!(c.list().is_empty());
    }

    #[test]
    fn invalid_line_width_is_ignored() {
        let mut c = Canvas::new();
        c.set_line_width(4.0);
        c.set_line_width(0.0);
        c.set_line_width(f32::NAN);
        assert_eq!(c.line_width(), 4.0);
    }

    #[test]
    fn clear_keeps_paint_state() {
        let mut c = Canvas::new();
        c.set_fill_color(Color::GREEN);
        triangle(&mut c);
        c.fill();
        c.clear();
        assert!(c.list().is_empty());
        assert_eq!(c.fill_color(), Color::GREEN);
    }
}
