use crate::coords::Matrix3;
use crate::input::{InputEvent, InputState};
use crate::scene::GameObject;
use crate::surface::{Canvas, Surface};
use crate::time::{Clock, FrameClock, FrameTime, SystemClock};

use super::config::GameConfig;

/// Root of a running game: the top-level scene nodes, the drawing surface,
/// keyboard state and the frame clock.
///
/// One frame ([`step`](Self::step)) is:
/// 1. read the clock, `dt` = seconds since the previous frame
/// 2. [`update`](Self::update): every root subtree, then clear pressed-key edges
/// 3. [`draw`](Self::draw): every root subtree from the identity matrix
///
/// Roots are processed in order, so later roots paint on top.
pub struct Game<S: Surface = Canvas, C: Clock = SystemClock> {
    config: GameConfig,
    roots: Vec<GameObject>,
    surface: S,
    input: InputState,
    clock: FrameClock<C>,
}

impl Game<Canvas, SystemClock> {
    /// Game recording into a [`Canvas`] and timed by the system clock.
    pub fn new(config: GameConfig, roots: Vec<GameObject>) -> Self {
        Self::with_parts(config, roots, Canvas::new(), SystemClock::new())
    }
}

impl<S: Surface, C: Clock> Game<S, C> {
    pub fn with_parts(config: GameConfig, roots: Vec<GameObject>, surface: S, clock: C) -> Self {
        Self {
            config,
            roots,
            surface,
            input: InputState::new(),
            clock: FrameClock::new(clock),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roots(&self) -> &[GameObject] {
        &self.roots
    }

    pub fn roots_mut(&mut self) -> &mut Vec<GameObject> {
        &mut self.roots
    }

    pub fn add_root(&mut self, root: GameObject) {
        self.roots.push(root);
    }

    /// Depth-first search across all roots, in root order.
    pub fn find(&self, name: &str) -> Option<&GameObject> {
        self.roots.iter().find_map(|r| r.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.roots.iter_mut().find_map(|r| r.find_mut(name))
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Applies a keyboard/focus event. Visible to the next `update`.
    pub fn handle_input(&mut self, event: &InputEvent) {
        log::trace!("input: {event:?}");
        self.input.apply_event(event);
    }

    /// Restarts frame timing from the current clock reading.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Update pass. Pressed-key edges are cleared afterwards, so each press is
    /// seen by exactly one update.
    pub fn update(&mut self, dt: f32) {
        for root in &mut self.roots {
            root.update(dt, &self.input);
        }
        self.input.end_frame();
    }

    /// Draw pass onto the game's surface.
    pub fn draw(&mut self) {
        let identity = Matrix3::identity();
        for root in &self.roots {
            root.draw(&mut self.surface, &identity);
        }
    }

    /// Runs one frame: clock tick, update, draw.
    pub fn step(&mut self) -> FrameTime {
        let ft = self.clock.tick();
        log::trace!("frame {} dt={:.4}s", ft.frame_index, ft.dt);

        self.update(ft.dt);
        self.draw();
        ft
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::{Transform, Vec2};
    use crate::input::{Key, KeyState};
    use crate::paint::Color;
    use crate::scene::components::RectSprite;
    use crate::scene::{Component, OwnerCtx};
    use crate::surface::DrawCmd;
    use crate::time::ManualClock;

    /// Records every `dt` and whether `A` read as pressed during update.
    struct Sensor {
        dts: Rc<RefCell<Vec<f32>>>,
        pressed: Rc<RefCell<Vec<bool>>>,
    }

    impl Component for Sensor {
        fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
            self.dts.borrow_mut().push(dt);
            self.pressed.borrow_mut().push(owner.input.key_pressed(Key::A));
        }
    }

    struct Harness {
        game: Game<Canvas, ManualClock>,
        clock: ManualClock,
        dts: Rc<RefCell<Vec<f32>>>,
        pressed: Rc<RefCell<Vec<bool>>>,
    }

    fn harness(start_ms: f64) -> Harness {
        let dts = Rc::new(RefCell::new(Vec::new()));
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new(start_ms);

        let root = GameObject::new("sensor").with_component(Sensor {
            dts: dts.clone(),
            pressed: pressed.clone(),
        });
        let game = Game::with_parts(GameConfig::new(), vec![root], Canvas::new(), clock.clone());

        Harness { game, clock, dts, pressed }
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn step_reports_dt_in_seconds() {
        let mut h = harness(1000.0);
        h.clock.set(1500.0);
        let ft = h.game.step();

        assert_eq!(ft.dt, 0.5);
        assert_eq!(*h.dts.borrow(), [0.5]);
    }

    #[test]
    fn pressed_is_seen_by_exactly_one_update() {
        let mut h = harness(0.0);
        h.game.handle_input(&key(Key::A, KeyState::Pressed));

        h.clock.advance(16.0);
        h.game.step();
        h.clock.advance(16.0);
        h.game.step();

        assert_eq!(*h.pressed.borrow(), [true, false]);
        assert!(h.game.input().key_down(Key::A));
        assert!(!h.game.input().key_pressed(Key::A));
    }

    #[test]
    fn release_between_frames_is_visible_next_frame() {
        let mut h = harness(0.0);
        h.game.handle_input(&key(Key::A, KeyState::Pressed));
        h.game.step();
        h.game.handle_input(&key(Key::A, KeyState::Released));
        assert!(h.game.input().key_up(Key::A));
    }

    #[test]
    fn update_clears_pressed_after_pass() {
        let mut h = harness(0.0);
        h.game.handle_input(&key(Key::A, KeyState::Pressed));
        assert!(h.game.input().key_pressed(Key::A));
        h.game.update(0.0);
        assert!(!h.game.input().key_pressed(Key::A));
    }

    #[test]
    fn roots_draw_in_order_from_identity() {
        let back = GameObject::new("back")
            .with_transform(Transform::new(Vec2::new(10.0, 10.0), 0.0, Vec2::splat(4.0)))
            .with_component(RectSprite::filled(Color::RED));
        let front = GameObject::new("front").with_component(RectSprite::filled(Color::BLUE));

        let mut game = Game::with_parts(
            GameConfig::new(),
            vec![back, front],
            Canvas::new(),
            ManualClock::new(0.0),
        );
        game.draw();

        let items = game.surface().list().items();
        assert_eq!(items.len(), 2);
        let (DrawCmd::Fill(first), DrawCmd::Fill(second)) = (&items[0], &items[1]) else {
            panic!("expected two fills");
        };
        assert_eq!(first.color, Color::RED);
        assert_eq!(first.subpaths[0].points[0], Vec2::new(8.0, 8.0));
        assert_eq!(second.color, Color::BLUE);
        assert_eq!(second.subpaths[0].points[0], Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn find_searches_all_roots() {
        let mut game = Game::with_parts(
            GameConfig::new(),
            vec![
                GameObject::new("a"),
                GameObject::new("b").with_child(GameObject::new("deep")),
            ],
            Canvas::new(),
            ManualClock::new(0.0),
        );
        assert!(game.find("deep").is_some());

        game.add_root(GameObject::new("c"));
        assert_eq!(game.roots().len(), 3);
        if let Some(deep) = game.find_mut("deep") {
            deep.transform.rotation = 45.0;
        }
        assert_eq!(game.find("deep").map(|d| d.transform.rotation), Some(45.0));
    }

    #[test]
    fn reset_clock_skips_setup_time() {
        let mut h = harness(0.0);
        h.clock.set(60_000.0);
        h.game.reset_clock();
        h.clock.advance(20.0);
        let ft = h.game.step();
        assert!((ft.dt - 0.02).abs() < 1e-6);
    }
}
