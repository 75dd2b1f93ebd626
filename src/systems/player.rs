use bevy_ecs::{
    query::{With, Without},
    system::{Query, Res},
};
use tracing::trace;

use crate::{
    constants::PLAYER_SPEED,
    map::{direction::Facing, Barriers, PlayField, TileMap},
    systems::{
        components::{overlaps, probe_at, Patrol, PlayerControlled, Position, SPRITE_SIZE},
        input::HeldKeys,
    },
};

/// Whether a sprite at `position` can still move towards `facing` without leaving the field.
pub fn has_room(field: &PlayField, position: Position, facing: Facing) -> bool {
    let max = field.max_position(SPRITE_SIZE);
    match facing {
        Facing::Left => position.0.x > 0,
        Facing::Right => position.0.x < max.x,
        Facing::Up => position.0.y > 0,
        Facing::Down => position.0.y < max.y,
        Facing::Idle => false,
    }
}

/// Picks the player's facing from the held arrow keys.
///
/// Keys are tried in priority order (left, right, up, down); a key pointing at the
/// edge of the field is skipped. With no usable key the player stands idle.
pub fn player_control_system(
    held: Res<HeldKeys>,
    field: Res<PlayField>,
    mut players: Query<(&Position, &mut Facing), With<PlayerControlled>>,
) {
    for (position, mut facing) in players.iter_mut() {
        let next = held
            .directions()
            .find(|direction| has_room(&field, *position, *direction))
            .unwrap_or(Facing::Idle);

        if *facing != next {
            *facing = next;
        }
    }
}

/// Moves the player one step along its facing.
///
/// The step is refused, and the player stops, when it would put the player's feet on
/// a barrier or walk the player into a patrol it is not already touching.
pub fn player_movement_system(
    map: Res<TileMap>,
    barriers: Res<Barriers>,
    field: Res<PlayField>,
    mut players: Query<(&mut Position, &mut Facing), (With<PlayerControlled>, Without<Patrol>)>,
    patrols: Query<&Position, (With<Patrol>, Without<PlayerControlled>)>,
) {
    for (mut position, mut facing) in players.iter_mut() {
        if !facing.is_moving() {
            continue;
        }

        let current = position.0;
        let destination = field.clamp(current + facing.delta() * PLAYER_SPEED, SPRITE_SIZE);

        if barriers.blocks(&map, probe_at(destination)) {
            trace!(?destination, "Player blocked by barrier");
            *facing = Facing::Idle;
            continue;
        }

        if patrols
            .iter()
            .any(|patrol| overlaps(destination, patrol.0) && !overlaps(current, patrol.0))
        {
            trace!(?destination, "Player blocked by patrol");
            *facing = Facing::Idle;
            continue;
        }

        position.0 = destination;
    }
}
