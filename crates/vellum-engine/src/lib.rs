//! Vellum: a small real-time 2D scene-graph engine.
//!
//! A [`Game`](game::Game) owns a forest of [`GameObject`](scene::GameObject)s.
//! Each frame it updates every object's [`Component`](scene::Component)s in
//! pre-order, then draws them with each object's world matrix (parent matrix
//! times local [`Transform`](coords::Transform)) onto a
//! [`Surface`](surface::Surface). The windowed runtime renders the recorded
//! canvas with `wgpu`.

pub mod coords;
pub mod core;
pub mod device;
pub mod game;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod surface;
pub mod time;
pub mod window;
