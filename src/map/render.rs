//! Tile texture loading and ground layer drawing.

use std::collections::HashMap;

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use tracing::{debug, trace};

use crate::error::{GameResult, TextureError};
use crate::map::{TileMap, TileRef};

/// The decoded image of every tileset tile, keyed by tile.
pub struct TileTextures {
    textures: HashMap<TileRef, Texture>,
}

impl TileTextures {
    /// Decodes the image of every tile the map's tilesets declare.
    ///
    /// # Errors
    ///
    /// Fails on the first image that cannot be read or decoded.
    pub fn load<T>(texture_creator: &TextureCreator<T>, map: &TileMap) -> GameResult<Self> {
        let mut textures = HashMap::with_capacity(map.images.len());
        for image in &map.images {
            trace!(tile = ?image.tile, source = %image.source.display(), "Loading tile image");
            let texture = texture_creator
                .load_texture(&image.source)
                .map_err(|reason| TextureError::LoadFailed {
                    name: image.source.display().to_string(),
                    reason,
                })?;
            textures.insert(image.tile, texture);
        }

        debug!(count = textures.len(), "Loaded tile images");
        Ok(Self { textures })
    }

    pub fn get(&self, tile: TileRef) -> Option<&Texture> {
        self.textures.get(&tile)
    }
}

pub struct MapRenderer;

impl MapRenderer {
    /// Draws every non-empty ground cell at its pixel position. Cells whose tile has no
    /// texture are skipped.
    pub fn render_map<C: RenderTarget>(
        canvas: &mut Canvas<C>,
        map: &TileMap,
        textures: &TileTextures,
    ) -> Result<(), TextureError> {
        for (cell, tile) in map.iter_cells() {
            let Some(texture) = textures.get(tile) else {
                continue;
            };
            let pixel = cell * map.tile_size;
            let dest = Rect::new(pixel.x as i32, pixel.y as i32, map.tile_size.x, map.tile_size.y);
            canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed)?;
        }
        Ok(())
    }
}
