use crate::coords::Viewport;
use crate::paint::Color;

/// Device handles and the logical viewport, shared by every renderer in a frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical pixels. Scene coordinates land on it 1:1.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self { device, queue, surface_format, viewport }
    }
}

/// Swapchain view plus the frame's encoder.
///
/// The first pass begun on a target clears it to the frame background; later
/// passes load what earlier ones wrote. [`finish`](Self::finish) clears a
/// target nobody drew into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pending: PendingClear,
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        background: Color,
    ) -> Self {
        Self {
            encoder,
            color_view,
            pending: PendingClear::new(background),
        }
    }

    /// Begins a single-attachment pass on the swapchain view.
    pub fn begin_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        let load = self.pending.take_load_op();
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }

    pub fn finish(&mut self) {
        if self.pending.is_pending() {
            let _clear = self.begin_pass("vellum clear");
        }
    }
}

/// Background clear owed to the first pass of a frame.
#[derive(Debug, Copy, Clone)]
struct PendingClear(Option<wgpu::Color>);

impl PendingClear {
    fn new(background: Color) -> Self {
        Self(Some(wgpu::Color {
            r: background.r as f64,
            g: background.g as f64,
            b: background.b as f64,
            a: background.a as f64,
        }))
    }

    fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    fn take_load_op(&mut self) -> wgpu::LoadOp<wgpu::Color> {
        match self.0.take() {
            Some(color) => wgpu::LoadOp::Clear(color),
            None => wgpu::LoadOp::Load,
        }
    }
}
