use crate::coords::{Matrix3, Transform};
use crate::input::InputState;
use crate::surface::Surface;

use super::GameObject;

/// View of the node that owns a component, handed to [`Component::update`].
///
/// The component itself is borrowed separately, so the owner's component list
/// is not reachable from here.
pub struct OwnerCtx<'a> {
    pub name: &'a str,
    pub transform: &'a mut Transform,
    pub children: &'a mut Vec<GameObject>,
    /// Keyboard state for the current frame.
    pub input: &'a InputState,
}

impl OwnerCtx<'_> {
    /// Returns the direct child named `name`.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.children.iter_mut().find(|c| c.name() == name)
    }
}

/// Behaviour and/or drawing unit attached to a [`GameObject`].
///
/// Both hooks default to no-ops, so a component implements only what it needs.
pub trait Component {
    /// Per-frame logic. `dt` is the elapsed time since the previous frame, in seconds.
    fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
        let _ = (owner, dt);
    }

    /// Issues drawing calls. `matrix` maps the owner's local space to surface space.
    fn draw(&self, surface: &mut dyn Surface, matrix: &Matrix3) {
        let _ = (surface, matrix);
    }

    /// Label used in debug output.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
