use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::info;

use crate::{
    events::{GameCommand, GameEvent},
    systems::components::GlobalState,
};

/// Whether the simulation is frozen. Drawing continues while paused.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PauseState(pub bool);

impl PauseState {
    pub fn active(&self) -> bool {
        self.0
    }
}

/// Run condition for the systems that advance the simulation.
pub fn simulation_active(pause: Res<PauseState>) -> bool {
    !pause.active()
}

/// Applies the commands sent by the input system this frame.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut pause: ResMut<PauseState>,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Exit) => {
                info!("Exit requested");
                state.exit = true;
            }
            GameEvent::Command(GameCommand::TogglePause) => {
                pause.0 = !pause.0;
                info!("{}", if pause.0 { "Paused" } else { "Unpaused" });
            }
        }
    }
}
