use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, ResMut},
};
use bitflags::bitflags;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::{Keycode, Scancode},
    EventPump,
};
use tracing::{debug, info};

use crate::{
    events::{GameCommand, GameEvent},
    map::direction::Facing,
    systems::components::GlobalState,
};

bitflags! {
    /// The arrow keys currently held down.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const UP = 1 << 0;
        const RIGHT = 1 << 1;
        const DOWN = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl HeldKeys {
    /// Arrow keys in the order they win when several are held.
    pub const PRIORITY: [(HeldKeys, Facing); 4] = [
        (HeldKeys::LEFT, Facing::Left),
        (HeldKeys::RIGHT, Facing::Right),
        (HeldKeys::UP, Facing::Up),
        (HeldKeys::DOWN, Facing::Down),
    ];

    /// Maps a physical key to the arrow it represents.
    pub fn from_scancode(scancode: Scancode) -> Option<HeldKeys> {
        match scancode {
            Scancode::Up => Some(HeldKeys::UP),
            Scancode::Right => Some(HeldKeys::RIGHT),
            Scancode::Down => Some(HeldKeys::DOWN),
            Scancode::Left => Some(HeldKeys::LEFT),
            _ => None,
        }
    }

    /// The held directions, highest priority first.
    pub fn directions(self) -> impl Iterator<Item = Facing> {
        Self::PRIORITY
            .into_iter()
            .filter(move |(key, _)| self.contains(*key))
            .map(|(_, facing)| facing)
    }
}

/// The command bound to a key press, if any.
pub fn key_command(keycode: Keycode) -> Option<GameCommand> {
    match keycode {
        Keycode::Escape | Keycode::Q => Some(GameCommand::Exit),
        Keycode::P => Some(GameCommand::TogglePause),
        _ => None,
    }
}

/// Drains pending SDL events, forwarding commands, then samples which arrow keys are held.
pub fn input_system(
    mut pump: NonSendMut<EventPump>,
    mut held: ResMut<HeldKeys>,
    mut state: ResMut<GlobalState>,
    mut writer: EventWriter<GameEvent>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                info!("Window close requested");
                writer.write(GameCommand::Exit.into());
            }
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::FocusGained => {
                    debug!("Window focused");
                    state.focused = true;
                }
                WindowEvent::FocusLost => {
                    debug!("Window lost focus");
                    state.focused = false;
                }
                _ => {}
            },
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(command) = key_command(key) {
                    writer.write(command.into());
                }
            }
            _ => {}
        }
    }

    let keyboard = pump.keyboard_state();
    let pressed = [Scancode::Up, Scancode::Right, Scancode::Down, Scancode::Left]
        .into_iter()
        .filter(|scancode| keyboard.is_scancode_pressed(*scancode))
        .filter_map(HeldKeys::from_scancode)
        .fold(HeldKeys::empty(), |keys, key| keys | key);

    if *held != pressed {
        *held = pressed;
    }
}
