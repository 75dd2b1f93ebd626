//! Desktop platform implementation.

use std::borrow::Cow;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rust_embed::RustEmbed;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::asset::Asset;
use crate::error::{AssetError, GameError};
use crate::formatter::CustomFormatter;

/// Sprite sheets are compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/sprites/"]
struct EmbeddedSprites;

/// Sleeps for the rest of a frame. Spins while focused for accuracy and yields the CPU otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `debug`. Fails if a global subscriber
/// is already installed.
pub fn init_logging() -> Result<(), GameError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().event_format(CustomFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub fn get_asset_bytes(asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    EmbeddedSprites::get(asset.path())
        .map(|file| file.data)
        .ok_or_else(|| AssetError::NotFound(asset.path().to_string()))
}

pub fn rng() -> ThreadRng {
    rand::rng()
}
