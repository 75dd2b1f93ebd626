#![allow(dead_code)]

use std::collections::HashSet;

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::{IVec2, UVec2};
use tilemap_demo::{
    error::GameError,
    events::GameEvent,
    map::{direction::Facing, Barriers, PlayField, TileImage, TileMap, TileRef},
    systems::{GlobalState, HeldKeys, PatrolBundle, PauseState, PlayerBundle, Position},
};

/// Size of a tile in the test maps, in pixels.
pub const TILE: u32 = 30;

pub const GRASS: TileRef = TileRef::new(0, 0);
pub const WALL: TileRef = TileRef::new(0, 1);

/// Creates a map of grass `width` by `height` tiles, with walls on the given cells.
pub fn create_test_map(width: u32, height: u32, walls: &[(u32, u32)]) -> TileMap {
    let mut cells = vec![Some(GRASS); (width * height) as usize];
    for &(x, y) in walls {
        cells[(y * width + x) as usize] = Some(WALL);
    }

    TileMap {
        size: UVec2::new(width, height),
        tile_size: UVec2::splat(TILE),
        cells,
        images: vec![
            TileImage {
                tile: GRASS,
                source: "grass.png".into(),
            },
            TileImage {
                tile: WALL,
                source: "wall.png".into(),
            },
        ],
        barrier_tiles: HashSet::from([WALL]),
    }
}

/// Creates a world holding the given map and every resource the gameplay systems read.
pub fn create_test_world(map: TileMap) -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(Barriers::from_map(&map));
    world.insert_resource(PlayField::from_map(&map));
    world.insert_resource(map);
    world.insert_resource(GlobalState::default());
    world.insert_resource(PauseState::default());
    world.insert_resource(HeldKeys::default());

    world
}

/// An open 20x20 tile (600x600 pixel) world.
pub fn create_open_world() -> World {
    create_test_world(create_test_map(20, 20, &[]))
}

pub fn spawn_test_player(world: &mut World, x: i32, y: i32) -> Entity {
    world.spawn(PlayerBundle::new(Position::new(x, y))).id()
}

pub fn spawn_test_patrol(world: &mut World, x: i32, y: i32, facing: Facing) -> Entity {
    let mut bundle = PatrolBundle::new(Position::new(x, y));
    bundle.facing = facing;
    world.spawn(bundle).id()
}

pub fn hold_keys(world: &mut World, keys: HeldKeys) {
    *world.resource_mut::<HeldKeys>() = keys;
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event);
}

pub fn position_of(world: &World, entity: Entity) -> IVec2 {
    world.get::<Position>(entity).expect("Entity should have a position").0
}

pub fn facing_of(world: &World, entity: Entity) -> Facing {
    *world.get::<Facing>(entity).expect("Entity should have a facing")
}
