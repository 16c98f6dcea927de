//! Scene graph.
//!
//! Responsibilities:
//! - own the node tree (`GameObject`) and its components
//! - drive per-frame update and draw in deterministic pre-order
//! - accumulate transform matrices strictly parent-to-child

mod component;
mod object;

pub mod components;

pub use component::{Component, OwnerCtx};
pub use object::GameObject;
