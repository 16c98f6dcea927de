/// GPU and swapchain preferences, applied when the game window opens.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one.
    pub prefer_srgb: bool,

    /// `Fifo` blocks presentation on vertical blank and so paces the frame
    /// loop at the display refresh rate.
    pub present_mode: wgpu::PresentMode,

    /// Requested composite alpha mode; unsupported requests fall back to the
    /// surface's first mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Frames the presentation engine may queue ahead (a hint).
    pub max_frame_latency: u32,
}

impl GpuInit {
    /// Vsync on selects `Fifo`; off selects `AutoNoVsync`, so dt then follows
    /// however fast frames render.
    pub fn vsync(mut self, on: bool) -> Self {
        self.present_mode = if on {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        self
    }

    pub fn power_preference(mut self, pref: wgpu::PowerPreference) -> Self {
        self.power_preference = pref;
        self
    }

    pub fn is_vsync(&self) -> bool {
        matches!(
            self.present_mode,
            wgpu::PresentMode::Fifo | wgpu::PresentMode::FifoRelaxed | wgpu::PresentMode::AutoVsync
        )
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            max_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vsynced() {
        assert!(GpuInit::default().is_vsync());
    }

    #[test]
    fn vsync_toggles_present_mode() {
        let off = GpuInit::default().vsync(false);
        assert_eq!(off.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert!(!off.is_vsync());
        assert_eq!(off.vsync(true).present_mode, wgpu::PresentMode::Fifo);
    }
}
