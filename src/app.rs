use std::time::{Duration, Instant};

use sdl2::Sdl;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::constants::{LOOP_TIME, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::map::loader::load_map;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    // Keep SDL alive for the app lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl App {
    /// Loads the map, opens a window sized to it, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Map` if the map cannot be loaded, `GameError::Config` if the
    /// scaled window would be too large, `GameError::Sdl` if any SDL
    /// initialization step fails, and propagates errors from `Game::new()`.
    pub fn new(config: &Config) -> GameResult<Self> {
        let map = load_map(&config.map_path())?;
        let canvas_size = map.pixel_size();
        let window_size = config.window_size(canvas_size)?;

        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(|e| GameError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!(
            width = window_size.x,
            height = window_size.y,
            scale = config.scale,
            "Creating game window"
        );
        let window = video_subsystem
            .window(WINDOW_TITLE, window_size.x, window_size.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        canvas
            .set_logical_size(canvas_size.x, canvas_size.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, texture_creator, event_pump, map)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame of the game loop, then sleeps for the rest of the frame.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_tick();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time, self.game.focused());
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }

        true
    }
}
