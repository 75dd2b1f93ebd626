//! Run-time options taken from the command line and the environment.

use std::path::PathBuf;

use glam::UVec2;

use crate::constants::map::{DEFAULT_ASSETS_DIR, DEFAULT_MAP_FILE};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the map file and the tile images it references.
    pub assets_dir: PathBuf,
    /// Map file name, relative to `assets_dir`.
    pub map_file: String,
    /// Integer window zoom.
    pub scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            map_file: DEFAULT_MAP_FILE.to_string(),
            scale: 1,
        }
    }
}

impl Config {
    /// Builds the configuration from program arguments (without the program name).
    ///
    /// `assets_env` is the value of the assets directory environment variable, if set;
    /// `--assets` takes precedence over it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown flags, flags missing their value and scales
    /// that are not positive integers.
    pub fn from_args<I>(args: I, assets_env: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        if let Some(dir) = assets_env.filter(|dir| !dir.is_empty()) {
            config.assets_dir = PathBuf::from(dir);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().ok_or_else(|| ConfigError::MissingValue(flag.to_string()));
            match arg.as_str() {
                "--assets" | "-a" => config.assets_dir = PathBuf::from(value(&arg)?),
                "--map" | "-m" => config.map_file = value(&arg)?,
                "--scale" | "-s" => {
                    let raw = value(&arg)?;
                    config.scale = match raw.parse::<u32>() {
                        Ok(scale) if scale > 0 => scale,
                        _ => return Err(ConfigError::InvalidScale(raw)),
                    };
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }

    /// The window size for a map of `map_size` pixels drawn at the configured scale.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidScale` when the scaled size overflows what SDL accepts.
    pub fn window_size(&self, map_size: UVec2) -> Result<UVec2, ConfigError> {
        let scale = |length: u32| length.checked_mul(self.scale).filter(|scaled| *scaled <= i32::MAX as u32);
        match (scale(map_size.x), scale(map_size.y)) {
            (Some(width), Some(height)) => Ok(UVec2::new(width, height)),
            _ => Err(ConfigError::InvalidScale(self.scale.to_string())),
        }
    }

    /// The full path of the map file.
    pub fn map_path(&self) -> PathBuf {
        self.assets_dir.join(&self.map_file)
    }
}
