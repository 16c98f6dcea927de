use winit::dpi::LogicalSize;

use crate::device::GpuInit;
use crate::paint::Color;
use crate::window::RuntimeConfig;

/// Game window and presentation settings.
///
/// Builder style:
///
/// ```rust,ignore
/// let config = GameConfig::new()
///     .title("Orbits")
///     .size(1024.0, 768.0)
///     .clear_color(Color::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Background the surface is cleared to before each draw pass.
    pub clear_color: Color,
    pub gpu: GpuInit,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            title: "Untitled Game".to_string(),
            width: 800.0,
            height: 600.0,
            clear_color: Color::WHITE,
            gpu: GpuInit::default(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_untitled() {
        let c = GameConfig::default();
        assert_eq!(c.title, "Untitled Game");
        assert_eq!(c.gpu.present_mode, wgpu::PresentMode::Fifo);
    }

    #[test]
    fn builder_feeds_runtime_config() {
        let rc = GameConfig::new().title("Orbits").size(320.0, 200.0).runtime_config();
        assert_eq!(rc.title, "Orbits");
        assert_eq!(rc.initial_size, LogicalSize::new(320.0, 200.0));
    }
}
