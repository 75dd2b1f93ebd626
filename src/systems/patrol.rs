use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::{
    constants::{PATROL_SPEED, PATROL_TURN_TICKS},
    map::{direction::Facing, Barriers, PlayField, TileMap},
    systems::components::{probe_at, Patrol, Position, SPRITE_SIZE},
};

/// Walks every patrol back and forth along its row.
///
/// Each patrol turns clockwise every [`PATROL_TURN_TICKS`] ticks and only moves while
/// facing left or right, so it walks right, pauses, walks left, pauses, and repeats.
/// A barrier ahead turns it around; so does either edge of the field.
pub fn patrol_system(
    map: Res<TileMap>,
    barriers: Res<Barriers>,
    field: Res<PlayField>,
    mut patrols: Query<(&mut Patrol, &mut Position, &mut Facing)>,
) {
    let max_x = field.max_position(SPRITE_SIZE).x;

    for (mut patrol, mut position, mut facing) in patrols.iter_mut() {
        patrol.move_count += 1;
        if patrol.move_count >= PATROL_TURN_TICKS {
            patrol.move_count = 0;
            *facing = facing.turn_clockwise();
        }

        if !facing.is_horizontal() {
            continue;
        }

        let destination = position.0 + facing.delta() * PATROL_SPEED;
        if barriers.blocks(&map, probe_at(destination)) {
            trace!(?destination, "Patrol turned around at barrier");
            *facing = facing.opposite();
            continue;
        }

        position.0 = destination;
        if position.0.x < 0 {
            position.0.x = 0;
            *facing = Facing::Right;
        } else if position.0.x > max_x {
            position.0.x = max_x;
            *facing = Facing::Left;
        }
    }
}
