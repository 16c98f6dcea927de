//! Core engine-facing contracts.
//!
//! This module defines the interface between the host runtime (platform loop)
//! and what it drives (normally a [`Game`](crate::game::Game)), and provides a
//! consistent per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
