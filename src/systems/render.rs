use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::{With, Without},
    system::{NonSend, NonSendMut, Query, Res},
};
use sdl2::{pixels::Color, render::Canvas, video::Window};
use tracing::warn;

use crate::{
    error::GameError,
    map::{
        direction::Facing,
        render::{MapRenderer, TileTextures},
        TileMap,
    },
    systems::components::{Patrol, PlayerControlled, Position, SpriteAnimation},
    texture::sprite_sheet::{SpriteSheet, SpriteSheets},
};

/// Draws the ground layer, then the player, then every patrol.
///
/// Failed copies are reported as [`GameError`] events; the rest of the frame is still drawn.
#[allow(clippy::type_complexity)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    map: Res<TileMap>,
    tiles: NonSend<TileTextures>,
    sheets: NonSend<SpriteSheets>,
    players: Query<(&Position, &Facing, &SpriteAnimation, &SpriteSheet), (With<PlayerControlled>, Without<Patrol>)>,
    patrols: Query<(&Position, &Facing, &SpriteAnimation, &SpriteSheet), (With<Patrol>, Without<PlayerControlled>)>,
    mut errors: EventWriter<GameError>,
) {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    if let Err(e) = MapRenderer::render_map(&mut *canvas, &map, &tiles) {
        errors.write(e.into());
    }

    for (position, facing, animation, sheet) in players.iter().chain(patrols.iter()) {
        if let Err(e) = sheets.draw(&mut *canvas, *sheet, *facing, animation.frame, position.0.x, position.0.y) {
            errors.write(e.into());
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}

/// Logs errors raised during the frame.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!("{error}");
    }
}
