use vellum_engine::coords::{Transform, Vec2};
use vellum_engine::game::{Game, GameConfig};
use vellum_engine::input::Key;
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::paint::Color;
use vellum_engine::scene::components::RectSprite;
use vellum_engine::scene::{Component, GameObject, OwnerCtx};

/// Constant rotation; Space flips direction.
struct Spin {
    degrees_per_sec: f32,
}

impl Component for Spin {
    fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
        if owner.input.key_pressed(Key::Space) {
            self.degrees_per_sec = -self.degrees_per_sec;
            log::info!("{} now spinning at {} deg/s", owner.name, self.degrees_per_sec);
        }
        owner.transform.rotate_by(self.degrees_per_sec * dt);
    }
}

/// Arrow keys / WASD move the owner; R recentres it.
struct KeyboardMover {
    speed: f32,
    home: Vec2,
}

impl Component for KeyboardMover {
    fn update(&mut self, owner: &mut OwnerCtx<'_>, dt: f32) {
        let input = owner.input;
        let axis = |neg: [Key; 2], pos: [Key; 2]| {
            let held = |keys: [Key; 2]| keys.iter().any(|k| input.key_down(*k));
            (held(pos) as i8 - held(neg) as i8) as f32
        };

        let dir = Vec2::new(
            axis([Key::ArrowLeft, Key::A], [Key::ArrowRight, Key::D]),
            axis([Key::ArrowUp, Key::W], [Key::ArrowDown, Key::S]),
        );
        if dir != Vec2::zero() {
            owner.transform.translate_by(dir.normalized() * self.speed * dt);
        }

        if input.key_pressed(Key::R) {
            owner.transform.translation = self.home;
        }
    }
}

fn build_scene() -> Vec<GameObject> {
    let centre = Vec2::new(400.0, 300.0);

    let moon = GameObject::new("moon")
        .with_transform(Transform::new(Vec2::new(1.2, 0.0), 0.0, Vec2::splat(0.3)))
        .with_component(RectSprite::filled(Color::from_srgb_u8(200, 200, 210, 255)));

    let planet = GameObject::new("planet")
        .with_transform(Transform::new(Vec2::new(3.0, 0.0), 0.0, Vec2::splat(0.4)))
        .with_component(Spin { degrees_per_sec: 120.0 })
        .with_component(RectSprite::filled(Color::BLUE).with_stroke(Color::BLACK, 2.0))
        .with_child(moon);

    let sun = GameObject::new("sun")
        .with_transform(Transform::new(centre, 0.0, Vec2::splat(60.0)))
        .with_component(KeyboardMover { speed: 240.0, home: centre })
        .with_component(Spin { degrees_per_sec: 30.0 })
        .with_component(RectSprite::filled(Color::from_srgb_u8(250, 190, 40, 255)))
        .with_child(planet);

    let frame = GameObject::new("frame")
        .with_transform(Transform::new(centre, 0.0, Vec2::new(760.0, 560.0)))
        .with_component(RectSprite::outlined(Color::BLACK, 1.0));

    vec![frame, sun]
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = GameConfig::new().title("Vellum Orbits").size(800.0, 600.0);
    let game = Game::new(config, build_scene());

    if let Err(err) = game.play() {
        log::error!("game exited with error: {err:#}");
        return Err(err);
    }
    Ok(())
}
