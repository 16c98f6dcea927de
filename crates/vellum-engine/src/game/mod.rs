//! Game root and main loop.
//!
//! [`Game`] owns the scene roots and runs update then draw once per frame.
//! [`Game::play`] opens a window and hands the loop to the runtime.

mod config;
mod game_loop;
mod host;

pub use config::GameConfig;
pub use game_loop::Game;

use crate::surface::Canvas;
use crate::time::Clock;
use crate::window::Runtime;

use host::GameHost;

impl<C: Clock + 'static> Game<Canvas, C> {
    /// Opens the game window and runs frames until it closes.
    ///
    /// Blocks the calling thread. Errors cover event loop, window and GPU
    /// setup.
    pub fn play(self) -> anyhow::Result<()> {
        let config = self.config().clone();
        log::info!(
            "starting {:?} ({}x{}) with {} root object(s)",
            config.title,
            config.width,
            config.height,
            self.roots().len()
        );

        Runtime::run(config.runtime_config(), config.gpu, GameHost::new(self))
    }
}
