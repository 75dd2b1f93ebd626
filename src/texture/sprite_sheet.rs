use std::collections::HashMap;

use bevy_ecs::component::Component;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

use crate::asset::{get_asset_bytes, Asset};
use crate::constants::{FRAMES_PER_SHEET, FRAME_HEIGHT, FRAME_WIDTH, IDLE_FRAME};
use crate::error::{GameResult, TextureError};
use crate::map::direction::Facing;

/// Which sprite sheet an entity is drawn from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SpriteSheet {
    Wizard,
    Soldier,
}

impl SpriteSheet {
    pub fn asset(self) -> Asset {
        match self {
            SpriteSheet::Wizard => Asset::WizardSheet,
            SpriteSheet::Soldier => Asset::SoldierSheet,
        }
    }
}

/// Returns the region of a sprite sheet holding `frame` for the given facing.
///
/// Sheets are laid out as one row per facing (up, right, down, left) and
/// [`FRAMES_PER_SHEET`] frames per row. Idle sprites always show the idle frame of the
/// down row; out-of-range frames wrap.
pub fn frame_rect(facing: Facing, frame: u32) -> Rect {
    let frame = if facing.is_moving() { frame % FRAMES_PER_SHEET } else { IDLE_FRAME };
    Rect::new(
        frame as i32 * FRAME_WIDTH,
        facing.sheet_row() as i32 * FRAME_HEIGHT,
        FRAME_WIDTH as u32,
        FRAME_HEIGHT as u32,
    )
}

/// Decoded sprite sheet textures, one per [`SpriteSheet`].
///
/// Stored as a non-send resource since SDL textures must stay on the main thread.
pub struct SpriteSheets {
    textures: HashMap<SpriteSheet, Texture>,
}

impl SpriteSheets {
    /// Decodes every embedded sprite sheet.
    ///
    /// # Errors
    ///
    /// Fails if a sheet is missing from the binary or cannot be decoded.
    pub fn load<T>(texture_creator: &TextureCreator<T>) -> GameResult<Self> {
        let mut textures = HashMap::new();
        for sheet in SpriteSheet::iter() {
            let asset = sheet.asset();
            let bytes = get_asset_bytes(asset)?;
            let texture = texture_creator
                .load_texture_bytes(&bytes)
                .map_err(|reason| TextureError::LoadFailed {
                    name: asset.path().to_string(),
                    reason,
                })?;

            let query = texture.query();
            debug!(sheet = ?sheet, width = query.width, height = query.height, "Loaded sprite sheet");
            textures.insert(sheet, texture);
        }
        Ok(Self { textures })
    }

    /// Copies one frame of a sheet to the canvas with its top-left corner at `(x, y)`.
    pub fn draw<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        sheet: SpriteSheet,
        facing: Facing,
        frame: u32,
        x: i32,
        y: i32,
    ) -> Result<(), TextureError> {
        let Some(texture) = self.textures.get(&sheet) else {
            return Err(TextureError::RenderFailed(format!("sprite sheet {sheet:?} is not loaded")));
        };
        let dest = Rect::new(x, y, FRAME_WIDTH as u32, FRAME_HEIGHT as u32);
        canvas
            .copy(texture, frame_rect(facing, frame), dest)
            .map_err(TextureError::RenderFailed)
    }
}
