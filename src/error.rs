//! Centralized error types for the tile map demo.
//!
//! Loading errors are fatal and bubble up to `main`; errors raised while a frame
//! is being drawn are sent through the ECS as events and only logged.

use std::path::PathBuf;

use bevy_ecs::event::Event;
use tracing::subscriber::SetGlobalDefaultError;

/// Main error type for the demo.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Logging error: {0}")]
    Logging(#[from] SetGlobalDefaultError),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Errors in the command line options.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Scale must be a positive integer small enough for the window, got {0:?}")]
    InvalidScale(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Errors raised while loading or interpreting the tile map.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Failed to parse map {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: tiled::Error,
    },

    #[error("Map is too large ({width}x{height} tiles of {tile_width}x{tile_height} pixels)")]
    TooLarge {
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    },

    #[error("Map has no tile layer")]
    NoTileLayer,

    #[error("Map is empty ({width}x{height} tiles of {tile_width}x{tile_height} pixels)")]
    Empty {
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    },
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {name}: {reason}")]
    LoadFailed { name: String, reason: String },

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
