use crate::core::{App, AppControl, FrameCtx};
use crate::input::InputEvent;
use crate::render::PathRenderer;
use crate::surface::Canvas;
use crate::time::Clock;

use super::game_loop::Game;

/// Drives a [`Game`] from the window runtime: one `step` per redraw, then the
/// recorded canvas is rendered and cleared for the next frame.
pub(crate) struct GameHost<C: Clock> {
    game: Game<Canvas, C>,
    renderer: PathRenderer,
    started: bool,
}

impl<C: Clock> GameHost<C> {
    pub(crate) fn new(game: Game<Canvas, C>) -> Self {
        Self {
            game,
            renderer: PathRenderer::new(),
            started: false,
        }
    }
}

impl<C: Clock> App for GameHost<C> {
    fn on_input(&mut self, event: &InputEvent) {
        self.game.handle_input(event);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.started {
            // Window and GPU setup should not show up as the first frame's dt.
            self.game.reset_clock();
            self.started = true;
            log::debug!("first frame");
        }

        self.game.step();

        let clear = self.game.config().clear_color;
        let renderer = &mut self.renderer;
        let canvas = self.game.surface();
        let control = ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, canvas.list());
        });

        self.game.surface_mut().clear();
        control
    }
}
