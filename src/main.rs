#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use tilemap_demo::app::App;
use tilemap_demo::config::Config;
use tilemap_demo::constants::map::ASSETS_DIR_ENV;
use tilemap_demo::constants::LOOP_TIME;
use tilemap_demo::platform;
use tracing::{error, info};

fn start() -> anyhow::Result<App> {
    let config = Config::from_args(env::args().skip(1), env::var(ASSETS_DIR_ENV).ok()).context("Invalid arguments")?;
    info!(?config, "Configuration loaded");

    App::new(&config).with_context(|| format!("Could not start with map {}", config.map_path().display()))
}

/// The main entry point of the application.
///
/// Loads the map and the sprites, opens the window, then runs the game loop until an
/// exit is requested. Any loading failure is fatal.
pub fn main() -> ExitCode {
    if let Err(e) = platform::init_logging() {
        eprintln!("Could not initialize logging: {e}");
    }

    let mut app = match start() {
        Ok(app) => app,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Exiting");
    ExitCode::SUCCESS
}
