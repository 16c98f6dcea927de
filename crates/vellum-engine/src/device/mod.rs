//! wgpu device and window surface.
//!
//! [`Gpu`] owns the device/queue and the configured swapchain of one window.
//! Frames are acquired and presented through it; surface failures are
//! classified into a [`SurfaceErrorAction`] for the frame loop.

mod context;
mod init;
mod surface;

pub use context::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
