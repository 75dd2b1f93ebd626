//! Tile map data, collision lookups and the map loader.

pub mod direction;
pub mod loader;
pub mod render;

use std::collections::HashSet;
use std::path::PathBuf;

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2};

/// Identifies a single tile of a single tileset: the tileset's index in the map
/// and the tile's local id within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileRef {
    pub tileset: usize,
    pub id: u32,
}

impl TileRef {
    pub const fn new(tileset: usize, id: u32) -> Self {
        Self { tileset, id }
    }
}

/// A tileset tile and the image file it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    pub tile: TileRef,
    pub source: PathBuf,
}

/// The ground layer of a parsed tile map, reduced to what the game needs.
///
/// Cells are stored row-major; `None` marks an empty cell.
#[derive(Resource, Debug, Clone)]
pub struct TileMap {
    /// Map size, in tiles.
    pub size: UVec2,
    /// Size of a single tile, in pixels.
    pub tile_size: UVec2,
    pub cells: Vec<Option<TileRef>>,
    /// Every tileset tile that has an image, whether or not the layer uses it.
    pub images: Vec<TileImage>,
    /// Tiles that sprites cannot walk onto.
    pub barrier_tiles: HashSet<TileRef>,
}

impl TileMap {
    /// The size of the whole map, in pixels. This is also the window size.
    pub fn pixel_size(&self) -> UVec2 {
        self.size * self.tile_size
    }

    pub fn cell_count(&self) -> usize {
        (self.size.x * self.size.y) as usize
    }

    /// Returns the tile at the given cell coordinates, if the cell exists and is not empty.
    pub fn tile(&self, x: u32, y: u32) -> Option<TileRef> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.cells[(y * self.size.x + x) as usize]
    }

    /// Maps a pixel coordinate to the row-major index of the tile under it.
    ///
    /// Returns `None` for pixels outside the map.
    pub fn tile_index_at(&self, pixel: IVec2) -> Option<usize> {
        let pixel_size = self.pixel_size().as_ivec2();
        if pixel.x < 0 || pixel.y < 0 || pixel.x >= pixel_size.x || pixel.y >= pixel_size.y {
            return None;
        }
        let cell = pixel.as_uvec2() / self.tile_size;
        Some((cell.y * self.size.x + cell.x) as usize)
    }

    /// Iterates over every non-empty cell as `(cell position, tile)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (UVec2, TileRef)> + '_ {
        let width = self.size.x;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, tile)| tile.map(|tile| (UVec2::new(index as u32 % width, index as u32 / width), tile)))
    }
}

/// The set of impassable tile indices.
///
/// Every index is guaranteed to lie within `[0, width * height)` of the map it
/// was built from.
#[derive(Resource, Debug, Clone, Default)]
pub struct Barriers {
    indices: HashSet<usize>,
}

impl Barriers {
    /// Collects the index of every cell holding one of the map's barrier tiles.
    pub fn from_map(map: &TileMap) -> Self {
        let indices = map
            .cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_some_and(|tile| map.barrier_tiles.contains(&tile)))
            .map(|(index, _)| index)
            .collect();
        Self { indices }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Whether the tile under the given pixel is impassable. Pixels outside the map never are.
    pub fn blocks(&self, map: &TileMap, pixel: IVec2) -> bool {
        map.tile_index_at(pixel).is_some_and(|index| self.contains(index))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// The pixel area sprites are confined to; the map's pixel size.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayField {
    pub size: IVec2,
}

impl PlayField {
    pub fn from_map(map: &TileMap) -> Self {
        Self {
            size: map.pixel_size().as_ivec2(),
        }
    }

    /// The largest valid top-left position for a sprite of the given size.
    pub fn max_position(&self, sprite_size: IVec2) -> IVec2 {
        (self.size - sprite_size).max(IVec2::ZERO)
    }

    /// Clamps a sprite's top-left position so the sprite stays inside the field.
    pub fn clamp(&self, position: IVec2, sprite_size: IVec2) -> IVec2 {
        position.clamp(IVec2::ZERO, self.max_position(sprite_size))
    }
}
