//! CPU tessellation of recorded paths into colored triangles.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::{DrawCmd, DrawList, SubPath};

/// Triangle-list vertex in logical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl PathVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self { pos: [p.x, p.y], color }
    }

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PathVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends triangles for every command in `list`, in paint order.
///
/// - fills: triangle fan per sub-path (exact for convex sub-paths)
/// - strokes: one quad per segment, each end extended by half the width so
///   corners of closed outlines are covered
///
/// Non-finite geometry is skipped.
pub fn tessellate(list: &DrawList, out: &mut Vec<PathVertex>) {
    for cmd in list.items() {
        match cmd {
            DrawCmd::Fill(fill) => {
                let color = fill.color.to_array();
                for sp in &fill.subpaths {
                    fill_subpath(sp, color, out);
                }
            }
            DrawCmd::Stroke(stroke) => {
                let color = stroke.color.to_array();
                for sp in &stroke.subpaths {
                    stroke_subpath(sp, color, stroke.width, out);
                }
            }
        }
    }
}

fn fill_subpath(sp: &SubPath, color: [f32; 4], out: &mut Vec<PathVertex>) {
    let pts = &sp.points;
    if pts.len() < 3 || !pts.iter().all(|p| p.is_finite()) {
        return;
    }

    let origin = pts[0];
    for pair in pts[1..].windows(2) {
        out.push(PathVertex::new(origin, color));
        out.push(PathVertex::new(pair[0], color));
        out.push(PathVertex::new(pair[1], color));
    }
}

fn stroke_subpath(sp: &SubPath, color: [f32; 4], width: f32, out: &mut Vec<PathVertex>) {
    let pts = &sp.points;
    if pts.len() < 2 || !(width > 0.0) || !pts.iter().all(|p| p.is_finite()) {
        return;
    }

    let half = width * 0.5;
    for pair in pts.windows(2) {
        stroke_segment(pair[0], pair[1], half, color, out);
    }

    if sp.closed && pts.len() >= 3 {
        stroke_segment(pts[pts.len() - 1], pts[0], half, color, out);
    }
}

fn stroke_segment(a: Vec2, b: Vec2, half: f32, color: [f32; 4], out: &mut Vec<PathVertex>) {
    let dir = (b - a).normalized();
    if dir == Vec2::zero() {
        return;
    }

    let a = a - dir * half;
    let b = b + dir * half;
    let n = dir.perp() * half;

    let quad = [a + n, b + n, b - n, a - n];
    for idx in [0, 1, 2, 0, 2, 3] {
        out.push(PathVertex::new(quad[idx], color));
    }
}
