//! Coordinate and geometry types shared across the scene graph and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod matrix3;
mod transform;
mod vec2;
mod viewport;

pub use matrix3::Matrix3;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
