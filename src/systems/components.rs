use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::IVec2;

use crate::constants::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::map::direction::Facing;
use crate::texture::sprite_sheet::SpriteSheet;

/// The size of every sprite, in pixels.
pub const SPRITE_SIZE: IVec2 = IVec2::new(FRAME_WIDTH, FRAME_HEIGHT);

/// A tag component for the entity controlled by the arrow keys.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The top-left pixel of a sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub IVec2);

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// The pixel tested against barriers: the middle of the sprite's bottom row.
    pub fn probe(&self) -> IVec2 {
        probe_at(self.0)
    }

    /// Whether sprites at these two positions overlap.
    pub fn overlaps(&self, other: &Position) -> bool {
        overlaps(self.0, other.0)
    }
}

/// The collision probe of a sprite whose top-left corner is at `top_left`.
pub fn probe_at(top_left: IVec2) -> IVec2 {
    top_left + IVec2::new(FRAME_WIDTH / 2, FRAME_HEIGHT - 1)
}

/// Whether two sprite rectangles with the given top-left corners overlap.
pub fn overlaps(a: IVec2, b: IVec2) -> bool {
    let distance = (a - b).abs();
    distance.x < SPRITE_SIZE.x && distance.y < SPRITE_SIZE.y
}

/// Walk-cycle state of a sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteAnimation {
    /// The frame currently shown, within the facing's sheet row.
    pub frame: u32,
    /// Ticks spent moving, used to pace frame advances.
    pub frame_delay: u32,
}

/// A non-player sprite that walks on its own, turning every few ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Patrol {
    /// Ticks since the last turn.
    pub move_count: u32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub facing: Facing,
    pub animation: SpriteAnimation,
    pub sheet: SpriteSheet,
}

impl PlayerBundle {
    pub fn new(position: Position) -> Self {
        Self {
            player: PlayerControlled,
            position,
            facing: Facing::Idle,
            animation: SpriteAnimation::default(),
            sheet: SpriteSheet::Wizard,
        }
    }
}

#[derive(Bundle)]
pub struct PatrolBundle {
    pub patrol: Patrol,
    pub position: Position,
    pub facing: Facing,
    pub animation: SpriteAnimation,
    pub sheet: SpriteSheet,
}

impl PatrolBundle {
    pub fn new(position: Position) -> Self {
        Self {
            patrol: Patrol::default(),
            position,
            facing: Facing::Idle,
            animation: SpriteAnimation::default(),
            sheet: SpriteSheet::Soldier,
        }
    }
}

#[derive(Resource, Debug)]
pub struct GlobalState {
    pub exit: bool,
    /// Whether the window has keyboard focus; frame pacing relaxes when it does not.
    pub focused: bool,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            exit: false,
            focused: true,
        }
    }
}
