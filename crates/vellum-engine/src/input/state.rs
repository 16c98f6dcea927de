use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Keyboard state for one game.
///
/// - `keys_down` is level-triggered: a key stays in it while held.
/// - `keys_pressed` is edge-triggered: a key enters it on the up→down
///   transition and leaves it at the next [`end_frame`](Self::end_frame).
///
/// Events are applied between frames; components read the state during update.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a platform-agnostic input event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => self.key_pressed_event(*key),
                KeyState::Released => self.key_released_event(*key),
            },

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release notifications are lost while unfocused.
                    self.keys_down.clear();
                    self.keys_pressed.clear();
                }
            }
        }
    }

    /// Key-down notification. Repeats of an already held key do not re-arm
    /// the pressed edge.
    pub fn key_pressed_event(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    /// Key-up notification: clears both the held and the pressed flag.
    pub fn key_released_event(&mut self, key: Key) {
        self.keys_down.remove(&key);
        self.keys_pressed.remove(&key);
    }

    /// Clears every pressed edge. Called once per frame after the update pass.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_up(&self, key: Key) -> bool {
        !self.key_down(key)
    }

    /// Currently held keys, in no particular order.
    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys_down.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn up(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    #[test]
    fn unknown_keys_read_as_up() {
        let input = InputState::new();
        assert!(!input.key_down(Key::Q));
        assert!(!input.key_pressed(Key::Q));
        assert!(input.key_up(Key::Q));
        assert!(!input.key_down(Key::Unknown(77)));
    }

    #[test]
    fn key_down_sets_held_and_pressed() {
        let mut input = InputState::new();
        input.apply_event(&down(Key::A));
        assert!(input.key_down(Key::A));
        assert!(input.key_pressed(Key::A));
        assert!(!input.key_up(Key::A));
    }

    #[test]
    fn pressed_lasts_one_frame() {
        let mut input = InputState::new();
        input.apply_event(&down(Key::A));
        input.end_frame();
        assert!(!input.key_pressed(Key::A));
        assert!(input.key_down(Key::A));
    }

    #[test]
    fn repeat_does_not_rearm_pressed() {
        let mut input = InputState::new();
        input.apply_event(&down(Key::Space));
        input.end_frame();
        input.apply_event(&InputEvent::Key {
            key: Key::Space,
            state: KeyState::Pressed,
            repeat: true,
        });
        assert!(!input.key_pressed(Key::Space));
        assert!(input.key_down(Key::Space));
    }

    #[test]
    fn key_up_clears_both_flags() {
        let mut input = InputState::new();
        input.apply_event(&down(Key::W));
        input.apply_event(&up(Key::W));
        assert!(!input.key_down(Key::W));
        assert!(!input.key_pressed(Key::W));
        assert!(input.key_up(Key::W));
    }

    #[test]
    fn release_then_press_rearms_edge() {
        let mut input = InputState::new();
        input.apply_event(&down(Key::D));
        input.end_frame();
        input.apply_event(&up(Key::D));
        input.apply_event(&down(Key::D));
        assert!(input.key_pressed(Key::D));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = InputState::new();
        input.apply_event(&InputEvent::Focused(true));
        input.apply_event(&down(Key::ArrowLeft));
        input.apply_event(&InputEvent::Focused(false));
        assert!(!input.focused);
        assert!(input.key_up(Key::ArrowLeft));
        assert!(!input.key_pressed(Key::ArrowLeft));
        assert_eq!(input.keys_down().count(), 0);
    }
}
