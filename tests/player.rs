use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use glam::IVec2;
use speculoos::prelude::*;
use tilemap_demo::map::direction::Facing;
use tilemap_demo::map::PlayField;
use tilemap_demo::systems::{
    has_room, player_control_system, player_movement_system, HeldKeys, Position,
};

mod common;

use common::{
    create_open_world, create_test_map, create_test_world, facing_of, hold_keys, position_of, spawn_test_patrol,
    spawn_test_player,
};

fn run_player(world: &mut World) {
    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");
    world
        .run_system_once(player_movement_system)
        .expect("System should run successfully");
}

fn set_facing(world: &mut World, entity: bevy_ecs::entity::Entity, facing: Facing) {
    *world.get_mut::<Facing>(entity).expect("Entity should have a facing") = facing;
}

#[test]
fn test_player_moves_towards_held_key() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 100, 100);

    hold_keys(&mut world, HeldKeys::RIGHT);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Right);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(105, 100));

    hold_keys(&mut world, HeldKeys::UP);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Up);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(105, 95));
}

#[test]
fn test_player_idles_without_keys() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 100, 100);

    hold_keys(&mut world, HeldKeys::DOWN);
    run_player(&mut world);
    hold_keys(&mut world, HeldKeys::empty());
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Idle);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(100, 105));
}

#[test]
fn test_key_priority() {
    let test_cases = [
        (HeldKeys::LEFT | HeldKeys::RIGHT, Facing::Left),
        (HeldKeys::LEFT | HeldKeys::UP, Facing::Left),
        (HeldKeys::RIGHT | HeldKeys::DOWN, Facing::Right),
        (HeldKeys::UP | HeldKeys::DOWN, Facing::Up),
        (HeldKeys::all(), Facing::Left),
    ];

    for (keys, expected) in test_cases {
        let mut world = create_open_world();
        let player = spawn_test_player(&mut world, 100, 100);

        hold_keys(&mut world, keys);
        world
            .run_system_once(player_control_system)
            .expect("System should run successfully");

        assert_eq!(facing_of(&world, player), expected, "{keys:?}");
    }
}

#[test]
fn test_key_towards_edge_is_skipped() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 0, 100);

    hold_keys(&mut world, HeldKeys::LEFT | HeldKeys::DOWN);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Down);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(0, 105));
}

#[test]
fn test_only_key_towards_edge_idles() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 0, 0);

    hold_keys(&mut world, HeldKeys::UP);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Idle);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::ZERO);
}

#[test]
fn test_player_is_clamped_to_field() {
    // 600x600 field, so the rightmost position is 552
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 550, 100);

    hold_keys(&mut world, HeldKeys::RIGHT);
    run_player(&mut world);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(552, 100));

    run_player(&mut world);
    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Idle);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(552, 100));
}

#[test]
fn test_player_blocked_by_barrier() {
    // Wall covers pixels 150..180 on both axes; the feet probe sits at (x + 24, y + 63)
    let mut world = create_test_world(create_test_map(20, 20, &[(5, 5)]));
    let player = spawn_test_player(&mut world, 122, 100);

    hold_keys(&mut world, HeldKeys::RIGHT);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Idle);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(122, 100));
}

#[test]
fn test_player_walks_past_barrier_above_its_feet() {
    // Only the feet are tested, so a wall level with the head does not block
    let mut world = create_test_world(create_test_map(20, 20, &[(5, 5)]));
    let player = spawn_test_player(&mut world, 122, 130);

    hold_keys(&mut world, HeldKeys::RIGHT);
    run_player(&mut world);

    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(127, 130));
}

#[test]
fn test_player_blocked_by_patrol() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 100, 100);
    spawn_test_patrol(&mut world, 150, 100, Facing::Idle);

    hold_keys(&mut world, HeldKeys::RIGHT);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Idle);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(100, 100));
}

#[test]
fn test_player_can_leave_overlapping_patrol() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 100, 100);
    spawn_test_patrol(&mut world, 120, 100, Facing::Idle);

    hold_keys(&mut world, HeldKeys::LEFT);
    run_player(&mut world);

    assert_that(&facing_of(&world, player)).is_equal_to(Facing::Left);
    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(95, 100));
}

#[test]
fn test_movement_ignores_idle_player() {
    let mut world = create_open_world();
    let player = spawn_test_player(&mut world, 100, 100);
    set_facing(&mut world, player, Facing::Idle);

    world
        .run_system_once(player_movement_system)
        .expect("System should run successfully");

    assert_that(&position_of(&world, player)).is_equal_to(IVec2::new(100, 100));
}

#[test]
fn test_has_room() {
    let field = PlayField { size: IVec2::splat(600) };

    assert_that(&has_room(&field, Position::new(0, 0), Facing::Left)).is_false();
    assert_that(&has_room(&field, Position::new(0, 0), Facing::Up)).is_false();
    assert_that(&has_room(&field, Position::new(0, 0), Facing::Right)).is_true();
    assert_that(&has_room(&field, Position::new(552, 536), Facing::Right)).is_false();
    assert_that(&has_room(&field, Position::new(552, 536), Facing::Down)).is_false();
    assert_that(&has_room(&field, Position::new(100, 100), Facing::Idle)).is_false();
}

#[test]
fn test_held_keys_directions() {
    let directions: Vec<Facing> = (HeldKeys::DOWN | HeldKeys::RIGHT).directions().collect();
    assert_eq!(directions, vec![Facing::Right, Facing::Down]);
    assert_that(&HeldKeys::empty().directions().count()).is_equal_to(0);
}
