//! Loading of Tiled `.tmx` maps into a [`TileMap`].

use std::collections::HashSet;
use std::path::Path;

use glam::UVec2;
use tiled::{Loader, PropertyValue};
use tracing::{debug, info, trace, warn};

use crate::constants::map::{BARRIER_PROPERTY, FALLBACK_BARRIER_TILE_ID};
use crate::error::MapError;
use crate::map::{TileImage, TileMap, TileRef};

/// Parses the map file at `path` and extracts its ground layer.
///
/// # Errors
///
/// Returns `MapError::Parse` if the file cannot be read or is not a valid map,
/// and the errors of [`TileMap::from_tiled`] for maps the game cannot use.
pub fn load_map(path: &Path) -> Result<TileMap, MapError> {
    debug!(path = %path.display(), "Parsing tile map");
    let map = Loader::new().load_tmx_map(path).map_err(|source| MapError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tile_map = TileMap::from_tiled(&map)?;
    info!(
        width = tile_map.size.x,
        height = tile_map.size.y,
        tile_width = tile_map.tile_size.x,
        tile_height = tile_map.tile_size.y,
        tilesets = map.tilesets().len(),
        "Loaded tile map"
    );
    Ok(tile_map)
}

/// Checks that a map of `size` tiles, each `tile_size` pixels, can be indexed and drawn,
/// and returns its number of cells.
///
/// # Errors
///
/// Returns `MapError::Empty` when any dimension is zero and `MapError::TooLarge` when the
/// pixel size does not fit a window coordinate.
pub fn checked_cell_count(size: UVec2, tile_size: UVec2) -> Result<usize, MapError> {
    if size.min_element() == 0 || tile_size.min_element() == 0 {
        return Err(MapError::Empty {
            width: size.x,
            height: size.y,
            tile_width: tile_size.x,
            tile_height: tile_size.y,
        });
    }

    let fits = |tiles: u32, pixels: u32| tiles.checked_mul(pixels).is_some_and(|length| length <= i32::MAX as u32);
    let cells = (size.x as usize).checked_mul(size.y as usize);
    match cells {
        Some(cells) if fits(size.x, tile_size.x) && fits(size.y, tile_size.y) => Ok(cells),
        _ => Err(MapError::TooLarge {
            width: size.x,
            height: size.y,
            tile_width: tile_size.x,
            tile_height: tile_size.y,
        }),
    }
}

impl TileMap {
    /// Converts a parsed Tiled map. The first tile layer is used as the ground layer.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`checked_cell_count`] for maps of unusable dimensions and
    /// `MapError::NoTileLayer` when there is nothing to walk on.
    pub fn from_tiled(map: &tiled::Map) -> Result<Self, MapError> {
        let size = UVec2::new(map.width, map.height);
        let tile_size = UVec2::new(map.tile_width, map.tile_height);
        let cell_count = checked_cell_count(size, tile_size)?;

        let layer = map
            .layers()
            .find_map(|layer| layer.as_tile_layer())
            .ok_or(MapError::NoTileLayer)?;

        let mut cells = Vec::with_capacity(cell_count);
        for y in 0..map.height as i32 {
            for x in 0..map.width as i32 {
                cells.push(
                    layer
                        .get_tile(x, y)
                        .map(|tile| TileRef::new(tile.tileset_index(), tile.id())),
                );
            }
        }

        let mut images = Vec::new();
        let mut flagged = HashSet::new();
        for (tileset_index, tileset) in map.tilesets().iter().enumerate() {
            if tileset.image.is_some() {
                warn!(tileset = %tileset.name, "Single-image tilesets are not supported, its tiles will not be drawn");
            }

            for (id, tile) in tileset.tiles() {
                let tile_ref = TileRef::new(tileset_index, id);
                if let Some(image) = &tile.image {
                    images.push(TileImage {
                        tile: tile_ref,
                        source: image.source.clone(),
                    });
                }
                if matches!(tile.properties.get(BARRIER_PROPERTY), Some(PropertyValue::BoolValue(true))) {
                    trace!(tileset = tileset_index, id, "Tile marked as barrier");
                    flagged.insert(tile_ref);
                }
            }
        }

        let barrier_tiles = if flagged.is_empty() {
            debug!(
                id = FALLBACK_BARRIER_TILE_ID,
                "No tile carries the barrier property, using the default barrier tile"
            );
            HashSet::from([TileRef::new(0, FALLBACK_BARRIER_TILE_ID)])
        } else {
            flagged
        };

        let drawable: HashSet<TileRef> = images.iter().map(|image| image.tile).collect();
        let undrawable = cells.iter().flatten().filter(|tile| !drawable.contains(*tile)).count();
        if undrawable > 0 {
            warn!(cells = undrawable, "Some ground cells use tiles without an image and will be skipped");
        }

        Ok(TileMap {
            size,
            tile_size,
            cells,
            images,
            barrier_tiles,
        })
    }
}
