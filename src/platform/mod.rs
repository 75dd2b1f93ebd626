//! Platform abstraction layer: frame pacing, randomness, embedded assets and log output.

mod desktop;
pub use desktop::*;
