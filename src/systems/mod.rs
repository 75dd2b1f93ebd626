//! The Entity-Component-System (ECS) module.
//!
//! This module contains the components, resources and systems that make up one frame:
//! input, player and patrol movement, animation, and drawing.

pub mod animation;
pub mod components;
pub mod input;
pub mod patrol;
pub mod player;
pub mod render;
pub mod state;

pub use self::animation::*;
pub use self::components::*;
pub use self::input::*;
pub use self::patrol::*;
pub use self::player::*;
pub use self::render::*;
pub use self::state::*;
