//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use glam::IVec2;
use rand::Rng;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info, trace};

use crate::constants::{PATROL_COUNT, PATROL_SPAWN_ATTEMPTS};
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::map::render::TileTextures;
use crate::map::{Barriers, PlayField, TileMap};
use crate::platform;
use crate::systems::{
    self, animation_system, command_system, error_report_system, patrol_system, player_control_system,
    player_movement_system, present_system, render_system, simulation_active, GlobalState, HeldKeys, PatrolBundle,
    PauseState, PlayerBundle, Position, SPRITE_SIZE,
};
use crate::texture::sprite_sheet::SpriteSheets;

/// System set for all gameplay systems, ordered so input is read before anything moves.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Reads the keyboard and applies commands
    Input,
    /// Moves the player and the patrols
    Update,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Animation,
    Draw,
}

/// Game state: an ECS `World` holding the sprites and the map, and the `Schedule`
/// that updates and draws them once per frame.
///
/// SDL objects (canvas, event pump and textures) are stored as non-send resources.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world: decodes tile images and sprite sheets, derives the barrier set,
    /// spawns the player in the middle of the map and the patrols at random.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if any image fails to load.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: TextureCreator<WindowContext>,
        event_pump: EventPump,
        map: TileMap,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Loading tile images");
        let tile_textures = TileTextures::load(&texture_creator, &map)?;

        debug!("Loading sprite sheets");
        let sprite_sheets = SpriteSheets::load(&texture_creator)?;

        let mut world = Self::create_world(map);

        world.insert_non_send_resource(tile_textures);
        world.insert_non_send_resource(sprite_sheets);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(texture_creator);

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// Creates a world holding the map resources and the spawned sprites, without any
    /// SDL state.
    pub fn create_world(map: TileMap) -> World {
        let mut world = World::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        let barriers = Barriers::from_map(&map);
        let field = PlayField::from_map(&map);
        debug!(barriers = barriers.len(), size = ?field.size, "Derived collision data");

        world.insert_resource(barriers);
        world.insert_resource(field);
        world.insert_resource(map);
        world.insert_resource(GlobalState::default());
        world.insert_resource(PauseState::default());
        world.insert_resource(HeldKeys::default());

        Self::spawn_sprites(&mut world);
        world
    }

    fn spawn_sprites(world: &mut World) {
        let field = *world.resource::<PlayField>();
        let start = field.size / 2 - SPRITE_SIZE / 2;
        debug!(?start, "Spawning player");
        world.spawn(PlayerBundle::new(Position(start)));

        let mut rng = platform::rng();
        for index in 0..PATROL_COUNT {
            let position = {
                let map = world.resource::<TileMap>();
                let barriers = world.resource::<Barriers>();
                patrol_spawn_point(&field, map, barriers, |max| {
                    IVec2::new(rng.random_range(0..max.x.max(1)), rng.random_range(0..max.y.max(1)))
                })
            };
            debug!(index, ?position, "Spawning patrol");
            world.spawn(PatrolBundle::new(position));
        }
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (systems::input_system, command_system)
                    .chain()
                    .in_set(GameplaySet::Input),
                (player_control_system, patrol_system, player_movement_system)
                    .chain()
                    .in_set(GameplaySet::Update),
                animation_system.in_set(RenderSet::Animation),
                (render_system, present_system, error_report_system)
                    .chain()
                    .in_set(RenderSet::Draw),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update.run_if(simulation_active),
                    RenderSet::Animation.run_if(simulation_active),
                    RenderSet::Draw,
                )
                    .chain(),
            );
    }

    /// Runs one frame: input, movement, animation and drawing.
    ///
    /// Returns `true` once an exit has been requested.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        let state = self.world.resource::<GlobalState>();
        trace!(exit = state.exit, "Frame complete");
        state.exit
    }

    pub fn focused(&self) -> bool {
        self.world.resource::<GlobalState>().focused
    }
}

/// Picks a patrol start position.
///
/// `sample` returns a random top-left position strictly below the bound it is given.
/// Positions whose feet land on a barrier are retried up to [`PATROL_SPAWN_ATTEMPTS`]
/// times; the last sample is used regardless.
pub fn patrol_spawn_point(
    field: &PlayField,
    map: &TileMap,
    barriers: &Barriers,
    mut sample: impl FnMut(IVec2) -> IVec2,
) -> Position {
    let bound = field.max_position(SPRITE_SIZE);
    let mut candidate = Position(sample(bound));
    for attempt in 1..PATROL_SPAWN_ATTEMPTS {
        if !barriers.blocks(map, candidate.probe()) {
            break;
        }
        trace!(attempt, position = ?candidate.0, "Patrol spawn point inside a barrier, retrying");
        candidate = Position(sample(bound));
    }
    candidate
}
