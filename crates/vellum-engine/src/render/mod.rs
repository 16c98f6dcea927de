//! GPU rendering subsystem.
//!
//! Consumes the `surface` draw stream and issues GPU commands via wgpu.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod path;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use path::PathRenderer;
pub use tessellate::{tessellate, PathVertex};
