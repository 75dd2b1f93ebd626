//! Assets compiled into the binary.
//!
//! The tile map and its tile images are read from disk at start-up instead, see [`crate::map::loader`].

use strum_macros::EnumIter;

pub use crate::platform::get_asset_bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    /// The player's sprite sheet.
    WizardSheet,
    /// The sprite sheet shared by every patrol.
    SoldierSheet,
}

impl Asset {
    /// The asset's file name inside `assets/sprites/`.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::WizardSheet => "wizard.png",
            Asset::SoldierSheet => "soldier1.png",
        }
    }
}
