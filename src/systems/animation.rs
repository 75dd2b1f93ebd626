use bevy_ecs::system::Query;

use crate::{
    constants::{FRAMES_PER_SHEET, FRAME_DELAY, IDLE_FRAME},
    map::direction::Facing,
    systems::components::SpriteAnimation,
};

impl SpriteAnimation {
    /// Advances the walk cycle by one tick.
    ///
    /// Moving sprites step to the next frame every [`FRAME_DELAY`] ticks, wrapping after
    /// [`FRAMES_PER_SHEET`] frames. Idle sprites hold [`IDLE_FRAME`].
    pub fn advance(&mut self, facing: Facing) {
        if !facing.is_moving() {
            self.frame = IDLE_FRAME;
            return;
        }

        self.frame_delay = self.frame_delay.wrapping_add(1);
        if self.frame_delay % FRAME_DELAY == 0 {
            self.frame = (self.frame + 1) % FRAMES_PER_SHEET;
        }
    }
}

pub fn animation_system(mut sprites: Query<(&Facing, &mut SpriteAnimation)>) {
    for (facing, mut animation) in sprites.iter_mut() {
        animation.advance(*facing);
    }
}
