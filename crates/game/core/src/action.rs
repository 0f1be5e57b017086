//! Directional player actions.

use strum::EnumIter;

/// One directional move. The absence of a pending action is modelled as
/// `Option::<Action>::None` on the game state, not as a variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    MoveRight,
    MoveLeft,
    MoveDown,
    MoveUp,
}

impl Action {
    /// True for moves along rows (left/right), false for column moves.
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::MoveRight | Self::MoveLeft)
    }
}
