//! This module contains all the constants used in the game.

use std::time::Duration;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The title of the game window.
pub const WINDOW_TITLE: &str = "Tile Map Demo";

/// The width of a single sprite frame, in pixels.
pub const FRAME_WIDTH: i32 = 48;
/// The height of a single sprite frame, in pixels.
pub const FRAME_HEIGHT: i32 = 64;
/// The number of animation frames on each row of a sprite sheet.
pub const FRAMES_PER_SHEET: u32 = 3;
/// The number of ticks between animation frame advances.
pub const FRAME_DELAY: u32 = 4;
/// The frame shown while a sprite is standing still.
pub const IDLE_FRAME: u32 = 1;

/// Player movement speed, in pixels per tick.
pub const PLAYER_SPEED: i32 = 5;
/// Patrol movement speed, in pixels per tick.
pub const PATROL_SPEED: i32 = 2;
/// The number of ticks a patrol keeps its facing before turning.
pub const PATROL_TURN_TICKS: u32 = 60;
/// The number of patrolling soldiers.
pub const PATROL_COUNT: usize = 2;
/// How many random spawn points are tried before accepting one inside a barrier.
pub const PATROL_SPAWN_ATTEMPTS: usize = 32;

/// Map-related defaults.
pub mod map {
    /// The name of the boolean tile property that marks a tile as impassable.
    pub const BARRIER_PROPERTY: &str = "barrier";
    /// Local id of the impassable tile in the first tileset when no tile carries [`BARRIER_PROPERTY`].
    pub const FALLBACK_BARRIER_TILE_ID: u32 = 1;
    /// The map file loaded when none is given on the command line.
    pub const DEFAULT_MAP_FILE: &str = "demo.tmx";
    /// The asset directory used when none is given on the command line.
    pub const DEFAULT_ASSETS_DIR: &str = "assets";
    /// Environment variable overriding [`DEFAULT_ASSETS_DIR`].
    pub const ASSETS_DIR_ENV: &str = "TILEMAP_DEMO_ASSETS";
}
