use bevy_ecs::component::Component;
use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

/// The way a sprite is facing.
///
/// The declaration order of the four cardinal variants matches the row order of
/// every sprite sheet, so [`Facing::sheet_row`] is the variant index.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
    #[default]
    Idle,
}

impl Facing {
    /// The four moving directions, in clockwise order.
    pub const DIRECTIONS: [Facing; 4] = [Facing::Up, Facing::Right, Facing::Down, Facing::Left];

    /// Returns the unit displacement for this facing. `Idle` does not move.
    pub const fn delta(self) -> IVec2 {
        match self {
            Facing::Up => IVec2::new(0, -1),
            Facing::Right => IVec2::new(1, 0),
            Facing::Down => IVec2::new(0, 1),
            Facing::Left => IVec2::new(-1, 0),
            Facing::Idle => IVec2::ZERO,
        }
    }

    /// Returns the opposite facing. `Idle` is its own opposite.
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Up => Facing::Down,
            Facing::Right => Facing::Left,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Idle => Facing::Idle,
        }
    }

    /// The next facing clockwise. A sprite standing idle starts walking right.
    pub const fn turn_clockwise(self) -> Facing {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
            Facing::Idle => Facing::Right,
        }
    }

    pub const fn is_moving(self) -> bool {
        !matches!(self, Facing::Idle)
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Facing::Left | Facing::Right)
    }

    /// The sprite sheet row for this facing. Idle sprites are drawn facing down.
    pub const fn sheet_row(self) -> u32 {
        match self {
            Facing::Up => 0,
            Facing::Right => 1,
            Facing::Down | Facing::Idle => 2,
            Facing::Left => 3,
        }
    }
}

impl From<Facing> for IVec2 {
    fn from(facing: Facing) -> Self {
        facing.delta()
    }
}
